//! Route pricing and take-off parameters

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A priced origin-destination pair
///
/// Origin and destination are fixed once created; the economic parameters
/// may be adjusted between flights. No validation is applied to them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    origin: String,
    destination: String,
    pub base_price: Decimal,
    pub base_cost: Decimal,
    pub loyalty_points_gained: i64,
    /// Minimum load factor as a fraction in [0, 1]
    pub minimum_take_off_percentage: Decimal,
}

impl Route {
    pub fn new(origin: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            base_price: Decimal::ZERO,
            base_cost: Decimal::ZERO,
            loyalty_points_gained: 0,
            minimum_take_off_percentage: Decimal::ZERO,
        }
    }

    pub fn with_base_price(mut self, price: Decimal) -> Self {
        self.base_price = price;
        self
    }

    pub fn with_base_cost(mut self, cost: Decimal) -> Self {
        self.base_cost = cost;
        self
    }

    pub fn with_loyalty_points_gained(mut self, points: i64) -> Self {
        self.loyalty_points_gained = points;
        self
    }

    pub fn with_minimum_take_off_percentage(mut self, percentage: Decimal) -> Self {
        self.minimum_take_off_percentage = percentage;
        self
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// Display title, e.g. "London to Paris"
    pub fn title(&self) -> String {
        format!("{} to {}", self.origin, self.destination)
    }
}
