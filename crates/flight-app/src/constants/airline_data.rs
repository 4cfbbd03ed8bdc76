//! Built-in London to Paris route and fleet

use flight_domain::model::{Aircraft, AirlineData, Route};
use rust_decimal::Decimal;
use std::sync::LazyLock;

/// London to Paris, flown by an Antonov AN-2 with three alternatives on standby
pub static LONDON_TO_PARIS: LazyLock<AirlineData> = LazyLock::new(|| AirlineData {
    route: Route::new("London", "Paris")
        .with_base_cost(Decimal::from(50))
        .with_base_price(Decimal::from(100))
        .with_loyalty_points_gained(5)
        .with_minimum_take_off_percentage(Decimal::new(7, 1)),
    assigned: Aircraft::new(123, "Antonov AN-2", 12),
    alternatives: vec![
        Aircraft::new(2, "ATR 640", 20),
        Aircraft::new(123, "Antonov AN-2", 12),
        Aircraft::new(124, "Bombardier Q400", 35),
    ],
});

pub fn default_airline_data() -> AirlineData {
    LONDON_TO_PARIS.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_route() {
        let data = default_airline_data();
        assert_eq!(data.route.title(), "London to Paris");
        assert_eq!(data.route.base_price, Decimal::from(100));
        assert_eq!(data.route.minimum_take_off_percentage, Decimal::new(7, 1));
        assert_eq!(data.assigned.seats, 12);
        assert_eq!(data.alternatives.len(), 3);
    }
}
