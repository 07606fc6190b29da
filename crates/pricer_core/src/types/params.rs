//! Validated pricing and simulation inputs.
//!
//! Both types are validated once at construction and immutable afterwards, so
//! the pricing layers never re-check their domains.

use super::error::PricingError;
use super::option::OptionType;

/// Default number of Monte Carlo samples.
pub const DEFAULT_SAMPLE_COUNT: usize = 10_000;

/// Market and contract inputs shared by the analytic and simulation pricers.
///
/// # Invariants
/// - every numeric field is finite
/// - `spot`, `strike`, `time_to_maturity` and `volatility` are strictly positive
/// - `risk_free_rate` is non-negative
///
/// # Examples
/// ```
/// use pricer_core::types::{OptionType, PricingError, PricingParameters};
///
/// let params = PricingParameters::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call).unwrap();
/// assert_eq!(params.spot(), 100.0);
///
/// let err = PricingParameters::new(100.0, 100.0, 0.0, 0.05, 0.2, OptionType::Call).unwrap_err();
/// assert!(matches!(err, PricingError::InvalidParameter { name: "time_to_maturity", .. }));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PricingParameters {
    spot: f64,
    strike: f64,
    time_to_maturity: f64,
    risk_free_rate: f64,
    volatility: f64,
    option_type: OptionType,
}

impl PricingParameters {
    /// Creates validated pricing parameters.
    ///
    /// # Arguments
    /// * `spot` - Current underlying price (S)
    /// * `strike` - Strike price (K)
    /// * `time_to_maturity` - Time to expiry in years (T)
    /// * `risk_free_rate` - Continuously compounded risk-free rate (r)
    /// * `volatility` - Annualised volatility (σ)
    /// * `option_type` - Call or put
    ///
    /// # Errors
    /// `PricingError::InvalidParameter` naming the first field that violates
    /// its domain.
    pub fn new(
        spot: f64,
        strike: f64,
        time_to_maturity: f64,
        risk_free_rate: f64,
        volatility: f64,
        option_type: OptionType,
    ) -> Result<Self, PricingError> {
        require_positive("spot", spot)?;
        require_positive("strike", strike)?;
        require_positive("time_to_maturity", time_to_maturity)?;
        require_non_negative("risk_free_rate", risk_free_rate)?;
        require_positive("volatility", volatility)?;

        Ok(Self {
            spot,
            strike,
            time_to_maturity,
            risk_free_rate,
            volatility,
            option_type,
        })
    }

    /// Creates parameters from a textual option type (`"call"` or `"put"`).
    ///
    /// The option type is checked before the numeric fields.
    ///
    /// # Errors
    /// - `PricingError::InvalidOptionType` for any other text
    /// - `PricingError::InvalidParameter` as for [`PricingParameters::new`]
    pub fn parse(
        spot: f64,
        strike: f64,
        time_to_maturity: f64,
        risk_free_rate: f64,
        volatility: f64,
        option_type: &str,
    ) -> Result<Self, PricingError> {
        let option_type = option_type.parse::<OptionType>()?;
        Self::new(
            spot,
            strike,
            time_to_maturity,
            risk_free_rate,
            volatility,
            option_type,
        )
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Returns the strike price.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Returns the time to maturity in years.
    #[inline]
    pub fn time_to_maturity(&self) -> f64 {
        self.time_to_maturity
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn risk_free_rate(&self) -> f64 {
        self.risk_free_rate
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Returns the option type.
    #[inline]
    pub fn option_type(&self) -> OptionType {
        self.option_type
    }

    /// Discount factor to maturity: e^(-rT).
    #[inline]
    pub fn discount_factor(&self) -> f64 {
        (-self.risk_free_rate * self.time_to_maturity).exp()
    }

    /// Returns a copy with a different option type.
    #[inline]
    pub fn with_option_type(&self, option_type: OptionType) -> Self {
        Self {
            option_type,
            ..*self
        }
    }
}

/// Monte Carlo simulation settings.
///
/// # Examples
/// ```
/// use pricer_core::types::SimulationConfig;
///
/// let config = SimulationConfig::new(50_000).unwrap().with_seed(42);
/// assert_eq!(config.sample_count(), 50_000);
/// assert_eq!(config.seed(), Some(42));
///
/// assert!(SimulationConfig::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SimulationConfig {
    sample_count: usize,
    seed: Option<u64>,
}

impl SimulationConfig {
    /// Creates a configuration drawing `sample_count` terminal prices.
    ///
    /// # Errors
    /// `PricingError::InvalidParameter` when `sample_count` is zero.
    pub fn new(sample_count: usize) -> Result<Self, PricingError> {
        if sample_count == 0 {
            return Err(PricingError::invalid_parameter(
                "sample_count",
                "must be at least 1",
            ));
        }
        Ok(Self {
            sample_count,
            seed: None,
        })
    }

    /// Fixes the seed so that repeated runs draw the same sample.
    #[inline]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Returns the number of samples.
    #[inline]
    pub fn sample_count(&self) -> usize {
        self.sample_count
    }

    /// Returns the optional seed.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            sample_count: DEFAULT_SAMPLE_COUNT,
            seed: None,
        }
    }
}

fn require_positive(name: &'static str, value: f64) -> Result<(), PricingError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(PricingError::invalid_parameter(
            name,
            format!("must be positive and finite, got {}", value),
        ));
    }
    Ok(())
}

fn require_non_negative(name: &'static str, value: f64) -> Result<(), PricingError> {
    if !value.is_finite() || value < 0.0 {
        return Err(PricingError::invalid_parameter(
            name,
            format!("must be non-negative and finite, got {}", value),
        ));
    }
    Ok(())
}
