//! CLI error types.

use pricer_core::types::PricingError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced to the operator by the `optionrisk` binary.
#[derive(Debug, Error)]
pub enum CliError {
    /// Command-line input outside the accepted range.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration could not be loaded or failed validation.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Rejected by the pricing core.
    #[error("Pricing failed: {0}")]
    Pricing(#[from] PricingError),

    /// Report serialisation failed.
    #[error("Serialisation failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pricing_error_conversion() {
        let err: CliError = PricingError::InvalidOptionType("straddle".to_string()).into();
        assert!(matches!(err, CliError::Pricing(_)));
        assert!(err.to_string().contains("straddle"));
    }

    #[test]
    fn test_config_error_is_transparent() {
        let err: CliError = ConfigError::InvalidBins(0).into();
        assert_eq!(err.to_string(), ConfigError::InvalidBins(0).to_string());
    }
}
