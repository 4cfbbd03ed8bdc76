//! Error types for flight-booking

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

/// Faults raised while computing a flight summary
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FlightError {
    #[error("No aircraft has been assigned to the flight")]
    NoAircraftAssigned,

    #[error("Base price {0} cannot be redeemed as loyalty points")]
    RedemptionOutOfRange(String),

    #[error("Loyalty balance of {0} cannot cover the redemption")]
    LoyaltyBalanceOutOfRange(String),

    #[error("Flight totals exceed the representable range")]
    TotalsOutOfRange,
}

/// Faults raised while parsing a console command
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("{field} must be a whole number, got '{value}'")]
    InvalidNumber { field: &'static str, value: String },

    #[error("redeeming flag must be true or false, got '{0}'")]
    InvalidFlag(String),

    #[error("Unknown command: {0}")]
    Unknown(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Flight error: {0}")]
    Flight(#[from] FlightError),

    #[error("Command error: {0}")]
    Command(#[from] CommandError),

    #[error("File not found: {0}")]
    FileNotFound(String),
}

pub type Result<T> = std::result::Result<T, Error>;
