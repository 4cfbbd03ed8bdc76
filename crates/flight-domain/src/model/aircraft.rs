use serde::{Deserialize, Serialize};

/// A plane that can be assigned to a flight or kept as an alternative
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Aircraft {
    pub id: u32,
    pub name: String,
    /// Number of passenger seats
    pub seats: u32,
}

impl Aircraft {
    pub fn new(id: u32, name: impl Into<String>, seats: u32) -> Self {
        Self {
            id,
            name: name.into(),
            seats,
        }
    }

    /// Whether every passenger already booked would fit on board
    pub fn can_seat(&self, seats_taken: u32) -> bool {
        self.seats >= seats_taken
    }
}
