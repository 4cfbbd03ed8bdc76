//! Scheduled flight setup from config

use std::sync::Arc;

use flight_domain::model::AirlineData;
use flight_domain::service::ScheduledFlight;
use flight_infra::AirlineDataLoader;
use flight_types::Result;

use crate::config::Config;
use crate::constants::default_airline_data;

/// Airline data named by the config, or the built-in route
pub fn open_airline_data(config: &Config) -> Result<AirlineData> {
    match &config.airline_data {
        Some(path) => AirlineDataLoader::load_from_file(path),
        None => Ok(default_airline_data()),
    }
}

/// Build a scheduled flight over the route, with the assigned aircraft and alternatives
pub fn build_flight(data: AirlineData) -> ScheduledFlight {
    let mut flight = ScheduledFlight::new(Arc::new(data.route));
    for aircraft in data.alternatives {
        flight.add_alternative_aircraft(aircraft);
    }
    flight.set_aircraft(data.assigned);
    flight
}
