//! Proceed/deny predicates and alternative aircraft selection
//!
//! The relaxed rule compares the number of airline employees on board directly
//! against the route's minimum take-off percentage. That mixes a count with a
//! fraction, and is kept as-is.

use flight_types::BusinessRule;
use rust_decimal::Decimal;

use crate::model::{Aircraft, Route};

/// Seat figures gathered from the roster
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoadFigures {
    pub seats_taken: u32,
    pub employee_seats: u32,
    pub profit_surplus: Decimal,
}

/// Whether the flight may operate under `rule`
pub fn may_proceed(rule: BusinessRule, load: &LoadFigures, route: &Route, aircraft: &Aircraft) -> bool {
    match rule {
        BusinessRule::Relaxed => {
            exceeds_threshold(load.employee_seats, route.minimum_take_off_percentage)
                && has_free_seat(load.seats_taken, aircraft.seats)
        }
        BusinessRule::Default => {
            is_profitable(load.profit_surplus)
                && has_free_seat(load.seats_taken, aircraft.seats)
                && meets_minimum_take_off(
                    load.seats_taken,
                    aircraft.seats,
                    route.minimum_take_off_percentage,
                )
        }
    }
}

/// Pool aircraft able to seat everyone booked, in pool order
pub fn suitable_alternatives(pool: &[Aircraft], seats_taken: u32) -> Vec<Aircraft> {
    pool.iter()
        .filter(|aircraft| aircraft.can_seat(seats_taken))
        .cloned()
        .collect()
}

fn is_profitable(profit_surplus: Decimal) -> bool {
    profit_surplus > Decimal::ZERO
}

// strict: a full aircraft does not count
fn has_free_seat(seats_taken: u32, capacity: u32) -> bool {
    seats_taken < capacity
}

fn meets_minimum_take_off(seats_taken: u32, capacity: u32, minimum: Decimal) -> bool {
    Decimal::from(seats_taken)
        .checked_div(Decimal::from(capacity))
        .is_some_and(|load_factor| load_factor > minimum)
}

fn exceeds_threshold(count: u32, threshold: Decimal) -> bool {
    Decimal::from(count) > threshold
}
