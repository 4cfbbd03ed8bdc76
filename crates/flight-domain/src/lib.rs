//! Domain models and services for scheduled flights

pub mod model;
pub mod service;
