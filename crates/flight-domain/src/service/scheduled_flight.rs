//! Scheduled flight aggregation
//!
//! A `ScheduledFlight` collects passengers for one route and turns them into a
//! [`FlightSummary`]: revenue, cost, loyalty flows, baggage and the
//! proceed/deny decision.

use std::sync::Arc;

use flight_types::{BusinessRule, FlightError};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use super::business_rule::{may_proceed, suitable_alternatives, LoadFigures};
use super::report::render_report;
use super::summary::{CategoryCounts, Decision, FlightSummary};
use crate::model::{Aircraft, Fare, Passenger, Route};

/// Running totals while walking the roster
#[derive(Debug, Default)]
struct Tally {
    revenue: Decimal,
    cost: Decimal,
    loyalty_accrued: i64,
    loyalty_redeemed: i64,
    baggage: u32,
    seats_taken: u32,
    employee_seats: u32,
}

impl Tally {
    fn add_revenue(&mut self, amount: Decimal) -> Result<(), FlightError> {
        self.revenue = self
            .revenue
            .checked_add(amount)
            .ok_or(FlightError::TotalsOutOfRange)?;
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct ScheduledFlight {
    route: Arc<Route>,
    aircraft: Option<Aircraft>,
    passengers: Vec<Passenger>,
    alternatives: Vec<Aircraft>,
    business_rule: BusinessRule,
}

impl ScheduledFlight {
    pub fn new(route: Arc<Route>) -> Self {
        Self {
            route,
            aircraft: None,
            passengers: Vec::new(),
            alternatives: Vec::new(),
            business_rule: BusinessRule::Default,
        }
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    /// Mutable access to the route's economic parameters.
    ///
    /// Clones the route first if the handle is shared elsewhere.
    pub fn route_mut(&mut self) -> &mut Route {
        Arc::make_mut(&mut self.route)
    }

    pub fn aircraft(&self) -> Option<&Aircraft> {
        self.aircraft.as_ref()
    }

    /// Replace the assigned aircraft. The roster is not checked against it here.
    pub fn set_aircraft(&mut self, aircraft: Aircraft) {
        self.aircraft = Some(aircraft);
    }

    pub fn business_rule(&self) -> BusinessRule {
        self.business_rule
    }

    pub fn set_business_rule(&mut self, rule: BusinessRule) {
        self.business_rule = rule;
    }

    pub fn passengers(&self) -> &[Passenger] {
        &self.passengers
    }

    /// Book a passenger. Capacity is only checked when summarizing.
    pub fn add_passenger(&mut self, passenger: Passenger) {
        self.passengers.push(passenger);
    }

    pub fn clear_passengers(&mut self) {
        self.passengers.clear();
    }

    pub fn alternatives(&self) -> &[Aircraft] {
        &self.alternatives
    }

    pub fn add_alternative_aircraft(&mut self, aircraft: Aircraft) {
        self.alternatives.push(aircraft);
    }

    pub fn clear_alternatives(&mut self) {
        self.alternatives.clear();
    }

    /// Aggregate the roster and apply the business rule.
    ///
    /// Redeeming loyalty members have ceiling(base price) deducted from their
    /// balance on every call, so this is not idempotent. On error no balance
    /// is changed.
    pub fn compute_summary(&mut self) -> Result<FlightSummary, FlightError> {
        let aircraft = self.aircraft.as_ref().ok_or(FlightError::NoAircraftAssigned)?;
        let route = self.route.as_ref();
        let redemption = if self.passengers.iter().any(Passenger::is_redeeming) {
            redemption_points(route.base_price)?
        } else {
            0
        };

        let mut tally = Tally::default();
        for passenger in &self.passengers {
            match &passenger.fare {
                Fare::General => {
                    tally.add_revenue(route.base_price)?;
                    tally.baggage += 1;
                }
                Fare::LoyaltyMember {
                    loyalty_points,
                    redeeming: true,
                } => {
                    if loyalty_points.checked_sub(redemption).is_none() {
                        return Err(FlightError::LoyaltyBalanceOutOfRange(passenger.name.clone()));
                    }
                    tally.loyalty_redeemed = checked_points(tally.loyalty_redeemed, redemption)?;
                    tally.baggage += 2;
                }
                Fare::LoyaltyMember {
                    redeeming: false, ..
                } => {
                    tally.loyalty_accrued =
                        checked_points(tally.loyalty_accrued, route.loyalty_points_gained)?;
                    tally.add_revenue(route.base_price)?;
                    tally.baggage += 2;
                }
                Fare::AirlineEmployee => {
                    tally.employee_seats += 1;
                    tally.baggage += 1;
                }
                Fare::Discounted => {
                    let half_fare = route
                        .base_price
                        .checked_div(Decimal::from(2))
                        .ok_or(FlightError::TotalsOutOfRange)?;
                    tally.add_revenue(half_fare)?;
                }
            }
            tally.cost = tally
                .cost
                .checked_add(route.base_cost)
                .ok_or(FlightError::TotalsOutOfRange)?;
            tally.seats_taken += 1;
        }

        let profit_surplus = tally
            .revenue
            .checked_sub(tally.cost)
            .ok_or(FlightError::TotalsOutOfRange)?;

        // balances change only once every total is known to fit
        for passenger in &mut self.passengers {
            if let Fare::LoyaltyMember {
                loyalty_points,
                redeeming: true,
            } = &mut passenger.fare
            {
                if let Some(balance) = loyalty_points.checked_sub(redemption) {
                    *loyalty_points = balance;
                }
            }
        }

        let mut categories = CategoryCounts::default();
        for passenger in &self.passengers {
            categories.record(passenger.category());
        }

        let load = LoadFigures {
            seats_taken: tally.seats_taken,
            employee_seats: tally.employee_seats,
            profit_surplus,
        };
        let decision = if may_proceed(self.business_rule, &load, route, aircraft) {
            Decision::Proceed
        } else {
            Decision::Deny {
                alternatives: suitable_alternatives(&self.alternatives, tally.seats_taken),
            }
        };

        log::debug!(
            "{}: {} seats on {} ({} rule), surplus {}, proceed={}",
            route.title(),
            tally.seats_taken,
            aircraft.name,
            self.business_rule,
            profit_surplus,
            decision.may_proceed()
        );

        Ok(FlightSummary {
            title: route.title(),
            business_rule: self.business_rule,
            total_passengers: tally.seats_taken,
            categories,
            expected_baggage: tally.baggage,
            revenue: tally.revenue,
            cost: tally.cost,
            profit_surplus,
            loyalty_points_accrued: tally.loyalty_accrued,
            loyalty_points_redeemed: tally.loyalty_redeemed,
            seats_taken: tally.seats_taken,
            employee_seats: tally.employee_seats,
            decision,
        })
    }

    /// Compute the summary and render it as the text report
    pub fn summary_report(&mut self) -> Result<String, FlightError> {
        self.compute_summary().map(|summary| render_report(&summary))
    }
}

fn checked_points(total: i64, points: i64) -> Result<i64, FlightError> {
    total.checked_add(points).ok_or(FlightError::TotalsOutOfRange)
}

fn redemption_points(base_price: Decimal) -> Result<i64, FlightError> {
    base_price
        .ceil()
        .to_i64()
        .ok_or_else(|| FlightError::RedemptionOutOfRange(base_price.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn london_to_paris(minimum: Decimal) -> Arc<Route> {
        Arc::new(
            Route::new("London", "Paris")
                .with_base_price(Decimal::from(100))
                .with_base_cost(Decimal::from(50))
                .with_loyalty_points_gained(5)
                .with_minimum_take_off_percentage(minimum),
        )
    }

    fn example_flight(seats: u32) -> ScheduledFlight {
        let mut flight = ScheduledFlight::new(london_to_paris(Decimal::new(7, 1)));
        for passenger in [
            Passenger::general("Steve", 30),
            Passenger::general("Mark", 12),
            Passenger::general("James", 36),
            Passenger::general("Jane", 32),
            Passenger::loyalty_member("John", 29, 1000, true),
            Passenger::loyalty_member("Sarah", 45, 1250, false),
            Passenger::loyalty_member("Jack", 60, 50, false),
            Passenger::airline_employee("Trevor", 47),
            Passenger::general("Alan", 34),
            Passenger::general("Suzy", 21),
        ] {
            flight.add_passenger(passenger);
        }
        flight.set_aircraft(Aircraft::new(123, "Antonov AN-2", seats));
        flight
    }

    #[test]
    fn test_example_totals() {
        let mut flight = example_flight(12);
        let summary = flight.compute_summary().unwrap();
        assert_eq!(summary.total_passengers, 10);
        assert_eq!(summary.revenue, Decimal::from(800));
        assert_eq!(summary.cost, Decimal::from(500));
        assert_eq!(summary.profit_surplus, Decimal::from(300));
        assert_eq!(summary.expected_baggage, 13);
        assert_eq!(summary.loyalty_points_accrued, 10);
        assert_eq!(summary.loyalty_points_redeemed, 100);
        assert_eq!(summary.employee_seats, 1);
        assert_eq!(summary.decision, Decision::Proceed);
    }

    #[test]
    fn test_category_counts_sum_to_total() {
        let mut flight = example_flight(12);
        flight.add_passenger(Passenger::discounted("Dora", 40));
        let summary = flight.compute_summary().unwrap();
        assert_eq!(
            summary.categories,
            CategoryCounts {
                general: 6,
                loyalty_member: 3,
                airline_employee: 1,
                discounted: 1,
            }
        );
        assert_eq!(summary.categories.total(), summary.total_passengers as usize);
    }

    #[test]
    fn test_no_aircraft_is_a_precondition_fault() {
        let mut flight = ScheduledFlight::new(london_to_paris(Decimal::new(7, 1)));
        flight.add_passenger(Passenger::loyalty_member("John", 29, 1000, true));
        assert_eq!(flight.compute_summary(), Err(FlightError::NoAircraftAssigned));
        // roster untouched when the summary is refused
        assert_eq!(flight.passengers()[0].loyalty_points(), Some(1000));
    }

    #[test]
    fn test_empty_roster_loses_nothing_and_is_denied() {
        let mut flight = ScheduledFlight::new(london_to_paris(Decimal::new(7, 1)));
        flight.set_aircraft(Aircraft::new(123, "Antonov AN-2", 12));
        let summary = flight.compute_summary().unwrap();
        assert_eq!(summary.total_passengers, 0);
        assert_eq!(summary.revenue, Decimal::ZERO);
        assert_eq!(summary.cost, Decimal::ZERO);
        assert!(!summary.is_profitable());
        assert_eq!(summary.decision, Decision::Deny { alternatives: vec![] });
    }

    #[test]
    fn test_redemption_deducts_ceiling_of_price() {
        let mut flight = ScheduledFlight::new(Arc::new(
            Route::new("London", "Paris")
                .with_base_price(Decimal::new(9950, 2))
                .with_base_cost(Decimal::from(50)),
        ));
        flight.set_aircraft(Aircraft::new(123, "Antonov AN-2", 12));
        flight.add_passenger(Passenger::loyalty_member("John", 29, 1000, true));

        let summary = flight.compute_summary().unwrap();
        assert_eq!(summary.loyalty_points_redeemed, 100);
        assert_eq!(summary.revenue, Decimal::ZERO);
        assert_eq!(flight.passengers()[0].loyalty_points(), Some(900));

        // every summary redeems again
        flight.compute_summary().unwrap();
        assert_eq!(flight.passengers()[0].loyalty_points(), Some(800));
    }

    #[test]
    fn test_discounted_pays_half_and_carries_no_baggage() {
        let mut flight = ScheduledFlight::new(Arc::new(
            Route::new("London", "Paris")
                .with_base_price(Decimal::from(101))
                .with_base_cost(Decimal::from(50)),
        ));
        flight.set_aircraft(Aircraft::new(123, "Antonov AN-2", 12));
        flight.add_passenger(Passenger::discounted("Suzy", 21));
        let summary = flight.compute_summary().unwrap();
        assert_eq!(summary.revenue, Decimal::new(505, 1));
        assert_eq!(summary.cost, Decimal::from(50));
        assert_eq!(summary.expected_baggage, 0);
    }

    #[test]
    fn test_capacity_ten_is_denied_without_alternatives() {
        let mut flight = example_flight(10);
        let summary = flight.compute_summary().unwrap();
        assert_eq!(summary.decision, Decision::Deny { alternatives: vec![] });
    }

    #[test]
    fn test_denied_flight_lists_alternatives() {
        let mut flight = example_flight(5);
        flight.add_alternative_aircraft(Aircraft::new(55, "A larger plane", 15));
        flight.add_alternative_aircraft(Aircraft::new(56, "A smaller plane", 8));
        let summary = flight.compute_summary().unwrap();
        assert_eq!(
            summary.decision,
            Decision::Deny {
                alternatives: vec![Aircraft::new(55, "A larger plane", 15)]
            }
        );
    }

    #[test]
    fn test_relaxed_rule_still_needs_a_free_seat() {
        let mut flight = example_flight(10);
        flight.set_business_rule(BusinessRule::Relaxed);
        assert!(!flight.compute_summary().unwrap().decision.may_proceed());

        flight.route_mut().minimum_take_off_percentage = Decimal::new(1, 1);
        assert!(!flight.compute_summary().unwrap().decision.may_proceed());

        flight.set_aircraft(Aircraft::new(123, "Antonov AN-2", 11));
        assert!(flight.compute_summary().unwrap().decision.may_proceed());
    }

    #[test]
    fn test_route_mut_does_not_touch_shared_route() {
        let route = london_to_paris(Decimal::new(7, 1));
        let mut flight = ScheduledFlight::new(Arc::clone(&route));
        flight.route_mut().base_price = Decimal::from(120);
        assert_eq!(route.base_price, Decimal::from(100));
        assert_eq!(flight.route().base_price, Decimal::from(120));
    }

    #[test]
    fn test_clear_passengers_and_alternatives() {
        let mut flight = example_flight(12);
        flight.add_alternative_aircraft(Aircraft::new(2, "ATR 640", 20));
        flight.clear_passengers();
        flight.clear_alternatives();
        assert!(flight.passengers().is_empty());
        assert!(flight.alternatives().is_empty());
    }

    #[test]
    fn test_redemption_out_of_range() {
        let mut flight = ScheduledFlight::new(Arc::new(
            Route::new("London", "Paris").with_base_price(Decimal::MAX),
        ));
        flight.set_aircraft(Aircraft::new(123, "Antonov AN-2", 12));
        flight.add_passenger(Passenger::general("Steve", 30));
        assert!(flight.compute_summary().is_ok());

        flight.add_passenger(Passenger::loyalty_member("John", 29, 1000, true));
        assert!(matches!(
            flight.compute_summary(),
            Err(FlightError::RedemptionOutOfRange(_))
        ));
    }

    #[test]
    fn test_balance_underflow_is_an_error() {
        let mut flight = example_flight(12);
        flight.add_passenger(Passenger::loyalty_member("Min", 40, i64::MIN, true));
        assert_eq!(
            flight.compute_summary(),
            Err(FlightError::LoyaltyBalanceOutOfRange("Min".to_string()))
        );
        // John redeems earlier in the roster, but nothing was deducted
        let john = flight.passengers().iter().find(|p| p.name == "John").unwrap();
        assert_eq!(john.loyalty_points(), Some(1000));
    }

    #[test]
    fn test_revenue_overflow_is_an_error() {
        let mut flight = ScheduledFlight::new(Arc::new(
            Route::new("London", "Paris").with_base_price(Decimal::MAX),
        ));
        flight.set_aircraft(Aircraft::new(123, "Antonov AN-2", 12));
        flight.add_passenger(Passenger::general("Steve", 30));
        flight.add_passenger(Passenger::general("Mark", 12));
        assert_eq!(flight.compute_summary(), Err(FlightError::TotalsOutOfRange));
    }

    #[test]
    fn test_cost_and_loyalty_overflow_are_errors() {
        let mut flight = ScheduledFlight::new(Arc::new(
            Route::new("London", "Paris").with_base_cost(Decimal::MAX),
        ));
        flight.set_aircraft(Aircraft::new(123, "Antonov AN-2", 12));
        flight.add_passenger(Passenger::airline_employee("Trevor", 47));
        flight.add_passenger(Passenger::airline_employee("Tina", 39));
        assert_eq!(flight.compute_summary(), Err(FlightError::TotalsOutOfRange));

        let mut flight = ScheduledFlight::new(Arc::new(
            Route::new("London", "Paris").with_loyalty_points_gained(i64::MAX),
        ));
        flight.set_aircraft(Aircraft::new(123, "Antonov AN-2", 12));
        flight.add_passenger(Passenger::loyalty_member("Sarah", 45, 1250, false));
        flight.add_passenger(Passenger::loyalty_member("Jack", 60, 50, false));
        assert_eq!(flight.compute_summary(), Err(FlightError::TotalsOutOfRange));
    }

    #[test]
    fn test_surplus_overflow_is_an_error() {
        let mut flight = ScheduledFlight::new(Arc::new(
            Route::new("London", "Paris")
                .with_base_price(Decimal::MAX)
                .with_base_cost(Decimal::MIN),
        ));
        flight.set_aircraft(Aircraft::new(123, "Antonov AN-2", 12));
        flight.add_passenger(Passenger::general("Steve", 30));
        assert_eq!(flight.compute_summary(), Err(FlightError::TotalsOutOfRange));
    }
}
