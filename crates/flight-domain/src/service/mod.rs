//! Domain services

pub mod business_rule;
pub mod report;
pub mod scheduled_flight;
pub mod summary;

pub use report::render_report;
pub use scheduled_flight::ScheduledFlight;
pub use summary::{CategoryCounts, Decision, FlightSummary};
