//! Core types for flight booking

mod error;

pub use error::*;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Output format for results
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Rule used to decide whether a flight may operate
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BusinessRule {
    /// Profitable, a free seat left, and load factor above the route minimum
    #[default]
    Default,
    /// Airline employees on board above the route minimum, and a free seat left
    Relaxed,
}

impl std::fmt::Display for BusinessRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BusinessRule::Default => write!(f, "default"),
            BusinessRule::Relaxed => write!(f, "relaxed"),
        }
    }
}

impl std::str::FromStr for BusinessRule {
    type Err = CommandError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "default" => Ok(BusinessRule::Default),
            "relaxed" => Ok(BusinessRule::Relaxed),
            _ => Err(CommandError::Unknown(s.to_string())),
        }
    }
}
