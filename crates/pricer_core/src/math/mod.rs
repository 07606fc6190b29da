//! Mathematical utilities shared by the pricing layers.
//!
//! - `distributions`: Standard normal CDF and PDF

pub mod distributions;

pub use distributions::{norm_cdf, norm_pdf};
