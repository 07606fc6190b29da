//! Analytical pricing formulas for European options.
//!
//! This module provides closed-form solutions for option pricing:
//! - Black-Scholes model for lognormal dynamics
//! - Analytical Greeks (Delta, Gamma, Vega, Theta, Rho)
//!
//! ## Design Principles
//!
//! - **Validated inputs**: pricing entry points take [`PricingParameters`](pricer_core::types::PricingParameters)
//! - **Numerical Stability**: Uses erfc-based CDF for accuracy in the tails

pub mod black_scholes;

// Re-export main types at module level
pub use black_scholes::{greeks, price, price_str, BlackScholes, Greeks};
