//! Structured flight summary produced by the aggregation step

use flight_types::BusinessRule;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::model::{Aircraft, PassengerCategory};

/// Passenger counts per fare category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCounts {
    pub general: usize,
    pub loyalty_member: usize,
    pub airline_employee: usize,
    pub discounted: usize,
}

impl CategoryCounts {
    pub fn record(&mut self, category: PassengerCategory) {
        match category {
            PassengerCategory::General => self.general += 1,
            PassengerCategory::LoyaltyMember => self.loyalty_member += 1,
            PassengerCategory::AirlineEmployee => self.airline_employee += 1,
            PassengerCategory::Discounted => self.discounted += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.general + self.loyalty_member + self.airline_employee + self.discounted
    }
}

/// Outcome of the business rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum Decision {
    Proceed,
    /// Alternatives are pool aircraft large enough for everyone booked, in pool order
    Deny { alternatives: Vec<Aircraft> },
}

impl Decision {
    pub fn may_proceed(&self) -> bool {
        matches!(self, Decision::Proceed)
    }
}

/// Financial and operational summary of a scheduled flight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightSummary {
    pub title: String,
    pub business_rule: BusinessRule,
    pub total_passengers: u32,
    pub categories: CategoryCounts,
    pub expected_baggage: u32,
    pub revenue: Decimal,
    pub cost: Decimal,
    pub profit_surplus: Decimal,
    pub loyalty_points_accrued: i64,
    pub loyalty_points_redeemed: i64,
    pub seats_taken: u32,
    pub employee_seats: u32,
    pub decision: Decision,
}

impl FlightSummary {
    pub fn is_profitable(&self) -> bool {
        self.profit_surplus > Decimal::ZERO
    }
}
