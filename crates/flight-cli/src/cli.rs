//! CLI definition using clap

use clap::{Parser, Subcommand};
use flight_types::{BusinessRule, OutputFormat};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "flight-booking")]
#[command(author = "yuuji")]
#[command(version)]
#[command(about = "Scheduled flight summaries and take-off decisions")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Business rule to start with (default, relaxed). Uses config value if not specified.
    #[arg(long, global = true)]
    pub rule: Option<BusinessRule>,

    /// Output format for summaries (table, json). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Airline data TOML (route, assigned aircraft, alternatives)
    #[arg(long, global = true)]
    pub airline_data: Option<PathBuf>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Read commands interactively from stdin (default)
    Run,

    /// Run the commands in a script file
    Replay {
        /// Path to a file with one command per line
        script: PathBuf,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set the business rule new sessions start with
        #[arg(long)]
        set_rule: Option<BusinessRule>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Set airline data TOML path
        #[arg(long)]
        set_airline_data: Option<PathBuf>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}
