//! Terminal price generation for Monte Carlo simulation.
//!
//! European payoffs depend only on the price at maturity, so each path is a
//! single exact log-normal step from spot to maturity:
//!
//! ```text
//! S(T) = S(0) × exp((r - 0.5σ²)T + σ√T × Z)
//! ```

use pricer_core::types::PricingParameters;

/// Parameters for Geometric Brownian Motion under the risk-neutral measure.
///
/// # Model
///
/// ```text
/// dS = r S dt + σ S dW
/// ```
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::GbmParams;
///
/// let gbm = GbmParams {
///     spot: 100.0,
///     rate: 0.05,
///     volatility: 0.2,
///     maturity: 1.0,
/// };
///
/// // Z = 0 moves the spot by the drift term only
/// let expected = 100.0 * ((0.05 - 0.5 * 0.04) * 1.0_f64).exp();
/// assert!((gbm.terminal_price(0.0) - expected).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GbmParams {
    /// Initial spot price (S₀).
    pub spot: f64,
    /// Risk-free rate (r) - annualised.
    pub rate: f64,
    /// Volatility (σ) - annualised.
    pub volatility: f64,
    /// Time to maturity (T) - in years.
    pub maturity: f64,
}

impl GbmParams {
    /// Log-drift over the whole horizon: (r - 0.5σ²)T.
    #[inline]
    pub fn log_drift(&self) -> f64 {
        (self.rate - 0.5 * self.volatility * self.volatility) * self.maturity
    }

    /// Diffusion scale over the whole horizon: σ√T.
    #[inline]
    pub fn diffusion(&self) -> f64 {
        self.volatility * self.maturity.sqrt()
    }

    /// Maps one standard normal variate to a terminal price.
    #[inline]
    pub fn terminal_price(&self, z: f64) -> f64 {
        self.spot * (self.log_drift() + self.diffusion() * z).exp()
    }

    /// Maps standard normal variates to terminal prices in place.
    ///
    /// On return `buffer[i]` holds the terminal price driven by the variate
    /// that was at `buffer[i]`, so draw order is preserved.
    pub fn fill_terminal_prices(&self, buffer: &mut [f64]) {
        let log_drift = self.log_drift();
        let diffusion = self.diffusion();

        for value in buffer.iter_mut() {
            *value = self.spot * (log_drift + diffusion * *value).exp();
        }
    }
}

impl From<&PricingParameters> for GbmParams {
    fn from(params: &PricingParameters) -> Self {
        Self {
            spot: params.spot(),
            rate: params.risk_free_rate(),
            volatility: params.volatility(),
            maturity: params.time_to_maturity(),
        }
    }
}
