//! Application service layer - config, setup data, console commands

pub mod app;
pub mod config;
pub mod constants;
pub mod setup;
