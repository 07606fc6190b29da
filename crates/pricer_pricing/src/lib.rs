//! # Pricer Engine (Layer 3: Simulation)
//!
//! ## Layer 3 Role
//!
//! pricer_pricing is the Monte Carlo engine of the workspace:
//! - Seeded, injectable random sources (`rng`)
//! - Terminal price simulation and discounted payoff estimation (`mc`)
//!
//! Layer 1 (pricer_core) supplies the validated inputs; this crate never
//! depends on the analytic models, which are used only to cross-check
//! simulated prices in the tests.
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_core::types::{OptionType, PricingParameters, SimulationConfig};
//! use pricer_pricing::mc::simulate;
//! use pricer_pricing::rng::PricerRng;
//!
//! let params = PricingParameters::new(100.0, 105.0, 0.5, 0.02, 0.3, OptionType::Call).unwrap();
//! let config = SimulationConfig::new(1_000).unwrap();
//! let mut rng = PricerRng::from_seed(12345);
//!
//! let (price, terminal_prices) = simulate(&params, &config, &mut rng).unwrap().into_parts();
//! assert!(price >= 0.0);
//! assert_eq!(terminal_prices.len(), 1_000);
//! ```

#![warn(missing_docs)]

pub mod mc;
pub mod rng;
