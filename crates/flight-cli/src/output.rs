//! Output formatting module

use std::io::Write;

use flight_domain::service::{render_report, FlightSummary};
use flight_types::{OutputFormat, Result};

pub fn write_summary<W: Write>(out: &mut W, output_format: OutputFormat, summary: &FlightSummary) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(summary)?;
        writeln!(out, "{}", content)?;
    } else {
        writeln!(out, "{}", render_report(summary))?;
    }
    Ok(())
}
