//! Console command handling

pub mod booking_session;
pub mod command;

pub use booking_session::{BookingSession, Outcome};
pub use command::{parse_command, Command};
