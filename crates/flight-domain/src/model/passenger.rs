//! Passenger and fare type definitions

use serde::{Deserialize, Serialize};

/// Fare a passenger travels on, carrying only the fields that fare uses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Fare {
    General,
    LoyaltyMember {
        /// Point balance; goes down when a redemption is reported
        loyalty_points: i64,
        /// Paying for this fare with points instead of cash
        redeeming: bool,
    },
    AirlineEmployee,
    Discounted,
}

impl Fare {
    pub fn category(&self) -> PassengerCategory {
        match self {
            Fare::General => PassengerCategory::General,
            Fare::LoyaltyMember { .. } => PassengerCategory::LoyaltyMember,
            Fare::AirlineEmployee => PassengerCategory::AirlineEmployee,
            Fare::Discounted => PassengerCategory::Discounted,
        }
    }
}

/// Fare category without per-fare data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PassengerCategory {
    General,
    LoyaltyMember,
    AirlineEmployee,
    Discounted,
}

/// A booked traveler
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Passenger {
    pub name: String,
    pub age: u32,
    pub fare: Fare,
}

impl Passenger {
    pub fn general(name: impl Into<String>, age: u32) -> Self {
        Self::with_fare(name, age, Fare::General)
    }

    pub fn loyalty_member(
        name: impl Into<String>,
        age: u32,
        loyalty_points: i64,
        redeeming: bool,
    ) -> Self {
        Self::with_fare(
            name,
            age,
            Fare::LoyaltyMember {
                loyalty_points,
                redeeming,
            },
        )
    }

    pub fn airline_employee(name: impl Into<String>, age: u32) -> Self {
        Self::with_fare(name, age, Fare::AirlineEmployee)
    }

    pub fn discounted(name: impl Into<String>, age: u32) -> Self {
        Self::with_fare(name, age, Fare::Discounted)
    }

    pub fn with_fare(name: impl Into<String>, age: u32, fare: Fare) -> Self {
        Self {
            name: name.into(),
            age,
            fare,
        }
    }

    pub fn category(&self) -> PassengerCategory {
        self.fare.category()
    }

    pub fn is_redeeming(&self) -> bool {
        matches!(self.fare, Fare::LoyaltyMember { redeeming: true, .. })
    }

    /// Loyalty point balance, only present for loyalty members
    pub fn loyalty_points(&self) -> Option<i64> {
        match self.fare {
            Fare::LoyaltyMember { loyalty_points, .. } => Some(loyalty_points),
            _ => None,
        }
    }
}
