//! TipTime-rs library: application logic for the tip calculator.

pub mod app;
pub mod config;
pub mod errors;
