//! # pricer_core: Foundation for European Option Pricing
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core is the bottom layer of the pricer workspace, providing:
//! - Option and simulation inputs: `OptionType`, `PricingParameters`, `SimulationConfig` (`types`)
//! - Error type: `PricingError` (`types::error`)
//! - Standard normal distribution functions: `norm_cdf`, `norm_pdf` (`math::distributions`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - libm: Double-precision complementary error function
//! - thiserror: Error derive
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::math::distributions::norm_cdf;
//! use pricer_core::types::{OptionType, PricingParameters};
//!
//! let params = PricingParameters::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call).unwrap();
//! assert_eq!(params.option_type(), OptionType::Call);
//!
//! let option_type: OptionType = "put".parse().unwrap();
//! assert_eq!(option_type, OptionType::Put);
//!
//! assert!((norm_cdf(0.0) - 0.5).abs() < 1e-15);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for the input types

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
