//! Text rendering of a flight summary

use std::fmt::Write;

use rust_decimal::Decimal;

use super::summary::{Decision, FlightSummary};

const VERTICAL_WHITE_SPACE: &str = "\n\n";
const INDENTATION: &str = "    ";

/// Render the summary as the fixed-format flight report
pub fn render_report(summary: &FlightSummary) -> String {
    let mut report = String::new();
    // writing into a String cannot fail
    let _ = write_report(&mut report, summary);
    report
}

fn write_report(out: &mut String, summary: &FlightSummary) -> std::fmt::Result {
    let counts = &summary.categories;

    write!(out, "Flight summary for {}", summary.title)?;
    out.push_str(VERTICAL_WHITE_SPACE);

    writeln!(out, "Total passengers: {}", summary.total_passengers)?;
    writeln!(out, "{INDENTATION}General sales: {}", counts.general)?;
    writeln!(out, "{INDENTATION}Loyalty member sales: {}", counts.loyalty_member)?;
    writeln!(out, "{INDENTATION}Airline employee comps: {}", counts.airline_employee)?;
    write!(out, "{INDENTATION}Discount sales: {}", counts.discounted)?;
    out.push_str(VERTICAL_WHITE_SPACE);

    write!(out, "Total expected baggage: {}", summary.expected_baggage)?;
    out.push_str(VERTICAL_WHITE_SPACE);

    writeln!(out, "Total revenue from flight: {}", money(summary.revenue))?;
    writeln!(out, "Total costs from flight: {}", money(summary.cost))?;
    let surplus_label = if summary.is_profitable() {
        "Flight generating profit of: "
    } else {
        "Flight losing money of: "
    };
    write!(out, "{surplus_label}{}", money(summary.profit_surplus))?;
    out.push_str(VERTICAL_WHITE_SPACE);

    writeln!(out, "Total loyalty points given away: {}", summary.loyalty_points_accrued)?;
    writeln!(out, "Total loyalty points redeemed: {}", summary.loyalty_points_redeemed)?;
    out.push_str(VERTICAL_WHITE_SPACE);

    match &summary.decision {
        Decision::Proceed => out.push_str("THIS FLIGHT MAY PROCEED"),
        Decision::Deny { alternatives } => {
            out.push_str("FLIGHT MAY NOT PROCEED");
            if !alternatives.is_empty() {
                out.push_str(VERTICAL_WHITE_SPACE);
                out.push_str("Other more suitable aircrafts are: ");
                for aircraft in alternatives {
                    write!(out, "\n{} could handle this flight. ", aircraft.name)?;
                }
            }
        }
    }
    Ok(())
}

fn money(value: Decimal) -> Decimal {
    value.normalize()
}
