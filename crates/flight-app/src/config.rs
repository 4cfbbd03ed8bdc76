//! Configuration management for flight-booking
//!
//! Config stored at: ~/.config/flight-booking/config.json

use flight_types::{BusinessRule, ConfigError, OutputFormat, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Business rule new sessions start with (default, relaxed)
    #[serde(default)]
    pub business_rule: BusinessRule,

    /// Default output format for summaries (table, json)
    #[serde(default = "default_output_format")]
    pub output_format: OutputFormat,

    /// Airline data TOML; the built-in London to Paris setup is used when unset
    #[serde(default)]
    pub airline_data: Option<PathBuf>,
}

fn default_output_format() -> OutputFormat {
    OutputFormat::Table
}

impl Default for Config {
    fn default() -> Self {
        Self {
            business_rule: BusinessRule::Default,
            output_format: default_output_format(),
            airline_data: None,
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("flight-booking");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load config from a specific path, or create default if it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)
                .map_err(|e| ConfigError::ParseError(e.to_string()))?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| ConfigError::SaveError(e.to_string()))?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|e| ConfigError::SaveError(e.to_string()))?;
        Ok(())
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Flight Booking Configuration")?;
        writeln!(f, "============================")?;
        writeln!(f)?;
        writeln!(f, "Business rule:  {}", self.business_rule)?;
        writeln!(f, "Output format:  {}", self.output_format)?;
        writeln!(
            f,
            "Airline data:   {}",
            self.airline_data
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(built-in London to Paris)".to_string())
        )?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:    {}", path.display())?;
        }

        Ok(())
    }
}
