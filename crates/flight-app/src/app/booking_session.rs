//! Booking session driven by console commands

use flight_domain::service::{FlightSummary, ScheduledFlight};
use flight_types::Result;

use super::command::{parse_command, Command};
use crate::config::Config;
use crate::setup::{build_flight, open_airline_data};

/// What applying a command produced
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Rule changed or passenger added
    Updated,
    Summary(Box<FlightSummary>),
    /// Malformed command, dropped without a message
    Ignored,
    Exit,
}

/// One scheduled flight taking commands
#[derive(Debug, Clone)]
pub struct BookingSession {
    flight: ScheduledFlight,
}

impl BookingSession {
    pub fn new(flight: ScheduledFlight) -> Self {
        Self { flight }
    }

    /// Set up the flight from the config's airline data and business rule
    pub fn from_config(config: &Config) -> Result<Self> {
        let mut flight = build_flight(open_airline_data(config)?);
        flight.set_business_rule(config.business_rule);
        Ok(Self::new(flight))
    }

    pub fn flight(&self) -> &ScheduledFlight {
        &self.flight
    }

    pub fn flight_mut(&mut self) -> &mut ScheduledFlight {
        &mut self.flight
    }

    /// Parse and apply one console line
    pub fn handle_line(&mut self, line: &str) -> Result<Outcome> {
        match parse_command(line)? {
            Some(command) => self.apply(command),
            None => {
                log::debug!("Ignoring malformed command: {}", line.trim());
                Ok(Outcome::Ignored)
            }
        }
    }

    pub fn apply(&mut self, command: Command) -> Result<Outcome> {
        match command {
            Command::SetRule(rule) => {
                log::info!("Business rule set to {}", rule);
                self.flight.set_business_rule(rule);
                Ok(Outcome::Updated)
            }
            Command::AddPassenger(passenger) => {
                log::info!("Added {:?} passenger {}", passenger.category(), passenger.name);
                self.flight.add_passenger(passenger);
                Ok(Outcome::Updated)
            }
            Command::PrintSummary => {
                let summary = self.flight.compute_summary()?;
                Ok(Outcome::Summary(Box::new(summary)))
            }
            Command::Exit => Ok(Outcome::Exit),
        }
    }
}
