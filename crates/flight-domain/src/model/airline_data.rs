use serde::{Deserialize, Serialize};

use super::{Aircraft, Route};

/// Route and fleet used to set up a scheduled flight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirlineData {
    pub route: Route,
    /// Aircraft flying the route
    pub assigned: Aircraft,
    /// Pool suggested when the flight may not proceed
    #[serde(default)]
    pub alternatives: Vec<Aircraft>,
}
