//! Built-in setup data

pub mod airline_data;

pub use airline_data::default_airline_data;
