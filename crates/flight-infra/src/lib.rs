//! Infrastructure layer - loaders for airline setup data

pub mod airline_data_loader;

pub use airline_data_loader::AirlineDataLoader;
