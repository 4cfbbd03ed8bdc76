//! Airline data loader from TOML configuration
//!
//! Expected layout:
//!
//! ```toml
//! [route]
//! origin = "London"
//! destination = "Paris"
//! base_price = 100
//! base_cost = 50
//! loyalty_points_gained = 5
//! minimum_take_off_percentage = 0.7
//!
//! [assigned]
//! id = 123
//! name = "Antonov AN-2"
//! seats = 12
//!
//! [[alternatives]]
//! id = 2
//! name = "ATR 640"
//! seats = 20
//! ```

use std::fs;
use std::path::Path;

use flight_domain::model::AirlineData;
use flight_types::{ConfigError, Error, Result};

pub struct AirlineDataLoader;

impl AirlineDataLoader {
    /// Load airline data from a TOML file
    pub fn load_from_file(path: &Path) -> Result<AirlineData> {
        if !path.exists() {
            return Err(Error::FileNotFound(path.display().to_string()));
        }
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Config(ConfigError::ParseError(format!(
                "Failed to read airline data file: {}",
                e
            )))
        })?;

        log::debug!("Loading airline data from {}", path.display());
        Self::load_from_str(&content)
    }

    /// Load airline data from a TOML string
    pub fn load_from_str(toml_content: &str) -> Result<AirlineData> {
        let data: AirlineData = toml::from_str(toml_content).map_err(|e| {
            Error::Config(ConfigError::ParseError(format!(
                "Failed to parse airline data TOML: {}",
                e
            )))
        })?;

        log::debug!(
            "Airline data for {}: assigned {}, {} alternative(s)",
            data.route.title(),
            data.assigned.name,
            data.alternatives.len()
        );
        Ok(data)
    }
}
