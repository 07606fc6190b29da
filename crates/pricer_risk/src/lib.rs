//! # Pricer Risk (L4: Application)
//!
//! Tail-risk figures over the terminal price distribution produced by the
//! Monte Carlo engine.
//!
//! This crate provides:
//! - Percentiles with linear interpolation between order statistics
//! - Value-at-Risk and Expected Shortfall at 95% (or any) confidence
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            pricer_risk (L4)             │
//! │  var/  - percentile, VaR, ES            │
//! └─────────────────────────────────────────┘
//!          ↑ terminal price sample
//! ┌─────────────────────────────────────────┐
//! │           pricer_pricing (L3)           │
//! │  Monte Carlo engine                     │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use pricer_core::types::{OptionType, PricingParameters, SimulationConfig};
//! use pricer_pricing::mc::simulate_seeded;
//! use pricer_risk::var::assess;
//!
//! let params = PricingParameters::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call).unwrap();
//! let config = SimulationConfig::new(10_000).unwrap().with_seed(42);
//! let result = simulate_seeded(&params, &config).unwrap();
//!
//! let report = assess(&result.terminal_prices).unwrap();
//! assert!(report.expected_shortfall <= report.value_at_risk);
//! assert!(report.value_at_risk < 100.0);
//! ```

#![warn(missing_docs)]

pub mod var;

pub use var::{assess, assess_at, percentile, RiskReport, DEFAULT_CONFIDENCE};
