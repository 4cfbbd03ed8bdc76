//! Command handlers

use std::fs::File;
use std::io::{self, BufReader, IsTerminal};
use std::path::{Path, PathBuf};

use flight_app::app::BookingSession;
use flight_app::config::Config;
use flight_types::{BusinessRule, Error, OutputFormat, Result};

use crate::cli::{Cli, Commands};
use crate::console::Console;

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    match &cli.command {
        Some(Commands::Config {
            show,
            set_rule,
            set_output,
            set_airline_data,
            reset,
        }) => cmd_config(*show, *set_rule, *set_output, set_airline_data.clone(), *reset),
        Some(Commands::Replay { script }) => {
            let config = effective_config(&cli)?;
            cmd_replay(&config, script)
        }
        Some(Commands::Run) | None => {
            let config = effective_config(&cli)?;
            cmd_run(&config)
        }
    }
}

/// Load config and apply CLI overrides
fn effective_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::load()?;
    if let Some(rule) = cli.rule {
        config.business_rule = rule;
    }
    if let Some(format) = cli.format {
        config.output_format = format;
    }
    if let Some(ref path) = cli.airline_data {
        config.airline_data = Some(path.clone());
    }
    Ok(config)
}

fn open_session(config: &Config) -> Result<BookingSession> {
    let session = BookingSession::from_config(config)?;
    let flight = session.flight();
    log::info!(
        "Flight {} on {} ({} rule)",
        flight.route().title(),
        flight.aircraft().map(|a| a.name.as_str()).unwrap_or("(no aircraft)"),
        flight.business_rule()
    );
    Ok(session)
}

fn cmd_run(config: &Config) -> Result<()> {
    let mut session = open_session(config)?;
    let stdin = io::stdin();
    let mut console = Console {
        out: io::stdout().lock(),
        err: io::stderr(),
        color: io::stderr().is_terminal(),
        format: config.output_format,
    };
    console.run(&mut session, stdin.lock())
}

fn cmd_replay(config: &Config, script: &Path) -> Result<()> {
    let reader = open_script(script)?;
    let mut session = open_session(config)?;
    let mut console = Console {
        out: io::stdout().lock(),
        err: io::stderr(),
        color: io::stderr().is_terminal(),
        format: config.output_format,
    };
    console.run(&mut session, reader)
}

/// Open a command script for line-by-line reading
fn open_script(script: &Path) -> Result<BufReader<File>> {
    if !script.exists() {
        return Err(Error::FileNotFound(script.display().to_string()));
    }
    Ok(BufReader::new(File::open(script)?))
}

fn cmd_config(
    show: bool,
    set_rule: Option<BusinessRule>,
    set_output: Option<OutputFormat>,
    set_airline_data: Option<PathBuf>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    let mut config = Config::load()?;
    let mut modified = false;

    if let Some(rule) = set_rule {
        config.business_rule = rule;
        modified = true;
    }

    if let Some(output_format) = set_output {
        config.output_format = output_format;
        modified = true;
    }

    if let Some(path) = set_airline_data {
        config.airline_data = Some(path);
        modified = true;
    }

    if modified {
        config.save()?;
        println!("Configuration updated");
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(())
}
