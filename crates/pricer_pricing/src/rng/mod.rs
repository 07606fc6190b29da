//! # Random Number Generation Infrastructure
//!
//! This module provides the random source used by the Monte Carlo pricer.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: All generators support seeding for deterministic sequences
//! - **Injection**: The pricer depends on the [`NormalSource`] trait, never on a
//!   global generator, so tests can substitute scripted variates
//! - **Efficiency**: Zero-allocation batch operations via `&mut [f64]` slices
//! - **Static dispatch**: Generic bounds only; no `Box<dyn Trait>` in hot paths
//!
//! ## Module Structure
//!
//! - [`source`]: The `NormalSource` capability trait
//! - [`prng`]: Seeded pseudo-random generator implementing it
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_pricing::rng::{NormalSource, PricerRng};
//!
//! // Create a seeded RNG for reproducible simulations
//! let mut rng = PricerRng::from_seed(12345);
//!
//! // Generate standard normal variates (mean=0, std=1)
//! let normal_value = rng.next_normal();
//!
//! // Batch generation into pre-allocated buffer (zero allocation)
//! let mut buffer = vec![0.0; 1000];
//! rng.fill_normal(&mut buffer);
//! ```

pub mod prng;
pub mod source;

// Public re-exports
pub use prng::{PricerRng, MAX_SEED};
pub use source::NormalSource;

#[cfg(test)]
mod tests;
