//! Value-at-Risk and Expected Shortfall over a simulated price sample.
//!
//! Both figures are read on the price scale of the sample itself: the
//! Value-at-Risk threshold is the lower percentile of the simulated terminal
//! prices, and the Expected Shortfall is the average price in the tail at or
//! below that threshold. Consequently `expected_shortfall <= value_at_risk`.
//!
//! Percentiles use linear interpolation between order statistics (the
//! "linear" method of Hyndman & Fan, type 7).

use pricer_core::types::PricingError;
use tracing::trace;

/// Confidence level used by [`assess`].
pub const DEFAULT_CONFIDENCE: f64 = 0.95;

/// Tail-risk figures derived from a price sample.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RiskReport {
    /// Confidence level in (0, 1).
    pub confidence: f64,
    /// Lower `(1 - confidence)` percentile of the sample.
    pub value_at_risk: f64,
    /// Mean of the sample elements at or below `value_at_risk`.
    pub expected_shortfall: f64,
}

/// Assesses a sample at the 95% confidence level.
///
/// # Errors
///
/// - `PricingError::EmptySample` if the sample (or its tail) is empty
/// - `PricingError::InvalidParameter` if the sample holds non-finite values
///
/// # Examples
///
/// ```rust
/// use pricer_risk::var::assess;
///
/// let sample: Vec<f64> = (1..=100).map(f64::from).collect();
/// let report = assess(&sample).unwrap();
///
/// // h = 99 × 0.05 = 4.95 → 5 + 0.95 × (6 - 5)
/// assert!((report.value_at_risk - 5.95).abs() < 1e-12);
/// // mean of 1..=5
/// assert!((report.expected_shortfall - 3.0).abs() < 1e-12);
/// ```
pub fn assess(sample: &[f64]) -> Result<RiskReport, PricingError> {
    tail_report(sample, DEFAULT_CONFIDENCE, 5.0)
}

/// Assesses a sample at an arbitrary confidence level.
///
/// # Errors
///
/// - `PricingError::InvalidParameter` if `confidence` is outside (0, 1)
/// - otherwise as for [`assess`]
pub fn assess_at(sample: &[f64], confidence: f64) -> Result<RiskReport, PricingError> {
    if !(confidence > 0.0 && confidence < 1.0) {
        return Err(PricingError::invalid_parameter(
            "confidence",
            format!("must lie in (0, 1), got {}", confidence),
        ));
    }
    tail_report(sample, confidence, (1.0 - confidence) * 100.0)
}

/// Percentile `q` (in [0, 100]) of the sample with linear interpolation.
///
/// The input slice is not modified; a sorted copy is used.
///
/// # Errors
///
/// - `PricingError::EmptySample` for an empty sample
/// - `PricingError::InvalidParameter` if `q` is outside [0, 100] or the
///   sample holds non-finite values
///
/// # Examples
///
/// ```rust
/// use pricer_risk::var::percentile;
///
/// let sample = [4.0, 1.0, 3.0, 2.0];
/// assert_eq!(percentile(&sample, 0.0).unwrap(), 1.0);
/// assert_eq!(percentile(&sample, 50.0).unwrap(), 2.5);
/// assert_eq!(percentile(&sample, 100.0).unwrap(), 4.0);
/// ```
pub fn percentile(sample: &[f64], q: f64) -> Result<f64, PricingError> {
    let sorted = sorted_copy(sample)?;
    interpolate(&sorted, q)
}

fn tail_report(sample: &[f64], confidence: f64, q: f64) -> Result<RiskReport, PricingError> {
    let sorted = sorted_copy(sample)?;
    let value_at_risk = interpolate(&sorted, q)?;

    // Sorted ascending: the tail is a prefix
    let tail_len = sorted.partition_point(|&x| x <= value_at_risk);
    if tail_len == 0 {
        return Err(PricingError::EmptySample);
    }
    // Clamp absorbs summation rounding when the tail is made of ties
    let expected_shortfall =
        (sorted[..tail_len].iter().sum::<f64>() / tail_len as f64).min(value_at_risk);

    trace!(
        samples = sorted.len(),
        tail = tail_len,
        value_at_risk,
        expected_shortfall,
        "Tail risk assessed"
    );

    Ok(RiskReport {
        confidence,
        value_at_risk,
        expected_shortfall,
    })
}

fn sorted_copy(sample: &[f64]) -> Result<Vec<f64>, PricingError> {
    if sample.is_empty() {
        return Err(PricingError::EmptySample);
    }
    if let Some(bad) = sample.iter().find(|x| !x.is_finite()) {
        return Err(PricingError::invalid_parameter(
            "sample",
            format!("must contain only finite values, found {}", bad),
        ));
    }

    let mut sorted = sample.to_vec();
    sorted.sort_by(f64::total_cmp);
    Ok(sorted)
}

fn interpolate(sorted: &[f64], q: f64) -> Result<f64, PricingError> {
    if !(0.0..=100.0).contains(&q) {
        return Err(PricingError::invalid_parameter(
            "percentile",
            format!("must lie in [0, 100], got {}", q),
        ));
    }

    let h = (sorted.len() - 1) as f64 * q / 100.0;
    let lo = h.floor() as usize;
    let hi = (lo + 1).min(sorted.len() - 1);
    let frac = h - lo as f64;

    Ok(sorted[lo] + frac * (sorted[hi] - sorted[lo]))
}
