//! Monte Carlo pricing of European options.
//!
//! This module simulates terminal asset prices under log-normal dynamics and
//! values the option as the discounted mean payoff.
//!
//! # Architecture
//!
//! ```text
//! simulate()
//! ├── SimulationConfig  (sample count, optional seed)
//! ├── NormalSource      (injected random source)
//! ├── GbmParams         (exact one-step terminal price map)
//! └── SimulationResult  (price, std error, terminal prices)
//! ```
//!
//! # Usage
//!
//! ```rust
//! use pricer_core::types::{OptionType, PricingParameters, SimulationConfig};
//! use pricer_pricing::mc::simulate_seeded;
//!
//! let params = PricingParameters::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Put).unwrap();
//! let config = SimulationConfig::new(20_000).unwrap().with_seed(7);
//!
//! let result = simulate_seeded(&params, &config).unwrap();
//! assert_eq!(result.sample_count(), 20_000);
//! assert!((result.price - 5.57).abs() < 4.0 * result.std_error);
//! ```

mod paths;
mod pricer;
mod result;

pub use paths::GbmParams;
pub use pricer::{simulate, simulate_seeded, simulate_str};
pub use result::SimulationResult;
