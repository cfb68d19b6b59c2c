//! Calculon library: application logic for the string calculator binary.

pub mod app;
pub mod config;
pub mod errors;
