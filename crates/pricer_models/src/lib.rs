//! # Pricer Models (L2: Business Logic)
//!
//! Closed-form valuation of European options.
//!
//! This crate provides:
//! - The Black-Scholes formula for calls and puts
//! - Analytical Greeks for the same model
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::types::{OptionType, PricingParameters};
//! use pricer_models::analytical::black_scholes;
//!
//! let params = PricingParameters::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Put).unwrap();
//! let put = black_scholes::price(&params).unwrap();
//! assert!((put - 5.57).abs() < 0.01);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
