//! Interactive command loop

use std::io::{BufRead, Write};

use flight_app::app::{BookingSession, Outcome};
use flight_types::{CommandError, Error, OutputFormat, Result};

use crate::output::write_summary;

const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Where console output goes
pub struct Console<W, E> {
    pub out: W,
    pub err: E,
    /// Color the unknown-input message
    pub color: bool,
    pub format: OutputFormat,
}

impl<W: Write, E: Write> Console<W, E> {
    /// Feed every line of `input` to the session until `exit` or end of input.
    ///
    /// Faults in a single command are reported and the loop carries on.
    pub fn run<R: BufRead>(&mut self, session: &mut BookingSession, input: R) -> Result<()> {
        for line in input.lines() {
            let line = line?;
            match session.handle_line(&line) {
                Ok(Outcome::Exit) => break,
                Ok(Outcome::Summary(summary)) => {
                    writeln!(self.out)?;
                    write_summary(&mut self.out, self.format, &summary)?;
                }
                Ok(Outcome::Updated) | Ok(Outcome::Ignored) => {}
                Err(Error::Command(CommandError::Unknown(_))) => self.unknown_input()?,
                Err(Error::Command(e)) => self.data_error(&e)?,
                Err(e) => self.data_error(&e)?,
            }
        }
        self.out.flush()?;
        Ok(())
    }

    fn unknown_input(&mut self) -> Result<()> {
        if self.color {
            writeln!(self.err, "{RED}UNKNOWN INPUT{RESET}")?;
        } else {
            writeln!(self.err, "UNKNOWN INPUT")?;
        }
        Ok(())
    }

    fn data_error(&mut self, e: &dyn std::error::Error) -> Result<()> {
        writeln!(self.out, "The data entered is not correct. The issue was {}", e)?;
        Ok(())
    }
}
