//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: Validation failures raised by the pricers and the risk estimator

use thiserror::Error;

/// Categorised pricing errors.
///
/// All failures are local validation failures: there is no transient failure
/// mode, so none of these are worth retrying.
///
/// # Variants
/// - `InvalidOptionType`: Option type text is neither call nor put
/// - `InvalidParameter`: A pricing or simulation input is out of its domain
/// - `EmptySample`: Risk figures requested over an empty selection
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::InvalidOptionType("straddle".to_string());
/// assert_eq!(
///     format!("{}", err),
///     "Invalid option type: 'straddle' (expected 'call' or 'put')"
/// );
///
/// let err = PricingError::invalid_parameter("volatility", "must be positive, got 0");
/// assert_eq!(
///     format!("{}", err),
///     "Invalid parameter 'volatility': must be positive, got 0"
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// Option type outside {call, put}.
    #[error("Invalid option type: '{0}' (expected 'call' or 'put')")]
    InvalidOptionType(String),

    /// Parameter violates its domain (non-positive volatility, zero samples, ...).
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        reason: String,
    },

    /// Sample (or tail selection) has no elements.
    #[error("Empty sample: percentile and tail mean are undefined")]
    EmptySample,
}

impl PricingError {
    /// Creates an `InvalidParameter` error.
    pub fn invalid_parameter(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_option_type_display() {
        let err = PricingError::InvalidOptionType("invalid".to_string());
        assert!(err.to_string().contains("'invalid'"));
    }

    #[test]
    fn test_invalid_parameter_display() {
        let err = PricingError::invalid_parameter("spot", "must be positive, got -1");
        assert_eq!(
            err.to_string(),
            "Invalid parameter 'spot': must be positive, got -1"
        );
    }

    #[test]
    fn test_empty_sample_display() {
        assert!(PricingError::EmptySample.to_string().contains("Empty sample"));
    }

    #[test]
    fn test_error_is_std_error() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}
        assert_error(&PricingError::EmptySample);
    }
}
