//! Command-line front end for European option pricing.
//!
//! The `optionrisk` binary prices one option in closed form and by Monte
//! Carlo simulation, then reports Value-at-Risk and Expected Shortfall read
//! from the simulated terminal prices.
//!
//! # Architecture
//!
//! As the **S**ervice layer, this crate only adapts the pricer crates to a
//! terminal: argument parsing, layered configuration, logging setup and
//! report rendering. All numerics live in `pricer_models`, `pricer_pricing`
//! and `pricer_risk`.

pub mod commands;
pub mod config;
pub mod error;
pub mod report;

pub use error::{CliError, Result};

/// Crate version reported by `optionrisk check`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
