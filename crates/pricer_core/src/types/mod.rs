//! Core option and simulation input types.
//!
//! This module provides:
//! - `option`: The `OptionType` enum (call or put) and its text parsing
//! - `params`: Validated `PricingParameters` and `SimulationConfig`
//! - `error`: The `PricingError` taxonomy shared by every layer
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`OptionType`] from `option`
//! - [`PricingParameters`], [`SimulationConfig`] from `params`
//! - [`PricingError`] from `error`

pub mod error;
pub mod option;
pub mod params;

pub use error::PricingError;
pub use option::OptionType;
pub use params::{PricingParameters, SimulationConfig, DEFAULT_SAMPLE_COUNT};
