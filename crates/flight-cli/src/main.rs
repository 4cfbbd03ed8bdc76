//! Flight Booking - scheduled flight summaries and take-off decisions
//!
//! Reads console commands that book passengers onto a flight and prints the
//! flight summary on request.

mod cli;
mod commands;
mod console;
mod output;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
