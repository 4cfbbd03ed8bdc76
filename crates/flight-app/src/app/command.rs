//! Free-text console command parsing
//!
//! Recognized lines:
//!
//! ```text
//! relaxed
//! default
//! print summary
//! add general <name> <age>
//! add loyalty <name> <age> <points> <redeeming:true|false>
//! add airline <name> <age>
//! add discounted <name> <age>
//! exit
//! ```
//!
//! Keywords are case-insensitive; passenger names keep the case they were typed in.

use flight_domain::model::Passenger;
use flight_types::{BusinessRule, CommandError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    SetRule(BusinessRule),
    PrintSummary,
    AddPassenger(Passenger),
    Exit,
}

/// Parse one console line.
///
/// `Ok(None)` means a known command had the wrong number of arguments and is
/// silently dropped.
pub fn parse_command(line: &str) -> Result<Option<Command>, CommandError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let keywords: Vec<String> = tokens.iter().take(2).map(|t| t.to_lowercase()).collect();
    let keywords: Vec<&str> = keywords.iter().map(String::as_str).collect();

    let (command, arity) = match keywords.as_slice() {
        ["relaxed", ..] => (Command::SetRule(BusinessRule::Relaxed), 1),
        ["default", ..] => (Command::SetRule(BusinessRule::Default), 1),
        ["print", "summary"] => (Command::PrintSummary, 2),
        ["exit", ..] => (Command::Exit, 1),
        ["add", kind @ ("general" | "loyalty" | "airline" | "discounted")] => {
            return parse_passenger(kind, &tokens).map(|p| p.map(Command::AddPassenger));
        }
        _ => return Err(CommandError::Unknown(line.trim().to_string())),
    };

    if tokens.len() == arity {
        Ok(Some(command))
    } else {
        Ok(None)
    }
}

fn parse_passenger(kind: &str, tokens: &[&str]) -> Result<Option<Passenger>, CommandError> {
    if tokens.len() < 4 {
        return Ok(None);
    }
    let name = tokens[2];
    let age = parse_number::<u32>("age", tokens[3])?;

    let passenger = match (kind, tokens.len()) {
        ("general", 4) => Passenger::general(name, age),
        ("airline", 4) => Passenger::airline_employee(name, age),
        ("discounted", 4) => Passenger::discounted(name, age),
        ("loyalty", 6) => {
            let points = parse_number::<i64>("loyalty points", tokens[4])?;
            let redeeming = tokens[5]
                .to_lowercase()
                .parse::<bool>()
                .map_err(|_| CommandError::InvalidFlag(tokens[5].to_string()))?;
            Passenger::loyalty_member(name, age, points, redeeming)
        }
        _ => return Ok(None),
    };
    Ok(Some(passenger))
}

fn parse_number<T: std::str::FromStr>(field: &'static str, value: &str) -> Result<T, CommandError> {
    value.parse().map_err(|_| CommandError::InvalidNumber {
        field,
        value: value.to_string(),
    })
}
