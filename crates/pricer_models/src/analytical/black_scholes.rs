//! Black-Scholes pricing model for European options.
//!
//! This module provides the Black-Scholes model for pricing European
//! call and put options with analytical Greeks calculations.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T

use pricer_core::math::distributions::{norm_cdf, norm_pdf};
use pricer_core::types::{OptionType, PricingError, PricingParameters};

/// Prices a European option with the Black-Scholes closed form.
///
/// # Errors
/// Never fails for parameters built through [`PricingParameters::new`]; the
/// `Result` keeps the signature aligned with the textual entry point
/// [`price_str`].
///
/// # Examples
/// ```
/// use pricer_core::types::{OptionType, PricingParameters};
/// use pricer_models::analytical::black_scholes;
///
/// let params = PricingParameters::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call).unwrap();
/// let call = black_scholes::price(&params).unwrap();
/// assert!((call - 10.4506).abs() < 1e-4);
/// ```
pub fn price(params: &PricingParameters) -> Result<f64, PricingError> {
    let bs = BlackScholes::from_params(params)?;
    Ok(bs.price(
        params.strike(),
        params.time_to_maturity(),
        params.option_type(),
    ))
}

/// Prices a European option whose type is given as text (`"call"` or `"put"`).
///
/// # Errors
/// - `PricingError::InvalidOptionType` for any other option type text
/// - `PricingError::InvalidParameter` for out-of-domain numeric inputs
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
/// use pricer_models::analytical::black_scholes::price_str;
///
/// let err = price_str(100.0, 100.0, 1.0, 0.05, 0.2, "invalid").unwrap_err();
/// assert!(matches!(err, PricingError::InvalidOptionType(_)));
/// ```
pub fn price_str(
    spot: f64,
    strike: f64,
    time_to_maturity: f64,
    risk_free_rate: f64,
    volatility: f64,
    option_type: &str,
) -> Result<f64, PricingError> {
    let params = PricingParameters::parse(
        spot,
        strike,
        time_to_maturity,
        risk_free_rate,
        volatility,
        option_type,
    )?;
    price(&params)
}

/// Computes all first-order Greeks plus gamma for the given parameters.
pub fn greeks(params: &PricingParameters) -> Result<Greeks, PricingError> {
    let bs = BlackScholes::from_params(params)?;
    Ok(bs.greeks(
        params.strike(),
        params.time_to_maturity(),
        params.option_type(),
    ))
}

/// Analytical sensitivities of a European option.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Greeks {
    /// ∂V/∂S
    pub delta: f64,
    /// ∂²V/∂S²
    pub gamma: f64,
    /// ∂V/∂σ
    pub vega: f64,
    /// ∂V/∂t (calendar time, usually negative)
    pub theta: f64,
    /// ∂V/∂r
    pub rho: f64,
}

/// Black-Scholes model for European option pricing.
///
/// Provides closed-form pricing and Greeks calculations for European
/// options under lognormal dynamics.
///
/// # Examples
/// ```
/// use pricer_models::analytical::BlackScholes;
///
/// let bs = BlackScholes::new(100.0, 0.05, 0.2).unwrap();
/// let call_price = bs.price_call(100.0, 1.0);
/// let put_price = bs.price_put(100.0, 1.0);
///
/// // Put-call parity: C - P = S - K*exp(-rT)
/// let parity = call_price - put_price - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlackScholes {
    /// Spot price (S)
    spot: f64,
    /// Risk-free interest rate (r)
    rate: f64,
    /// Volatility (σ)
    volatility: f64,
}

impl BlackScholes {
    /// Creates a new Black-Scholes model.
    ///
    /// # Arguments
    /// * `spot` - Current spot price (must be positive)
    /// * `rate` - Risk-free interest rate (annualised)
    /// * `volatility` - Volatility (must be positive)
    ///
    /// # Errors
    /// `PricingError::InvalidParameter` if spot or volatility is not positive
    /// and finite, or if the rate is not finite.
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::BlackScholes;
    ///
    /// assert!(BlackScholes::new(100.0, 0.05, 0.2).is_ok());
    /// assert!(BlackScholes::new(-100.0, 0.05, 0.2).is_err());
    /// assert!(BlackScholes::new(100.0, 0.05, 0.0).is_err());
    /// ```
    pub fn new(spot: f64, rate: f64, volatility: f64) -> Result<Self, PricingError> {
        if !spot.is_finite() || spot <= 0.0 {
            return Err(PricingError::invalid_parameter(
                "spot",
                format!("must be positive and finite, got {}", spot),
            ));
        }
        if !rate.is_finite() {
            return Err(PricingError::invalid_parameter(
                "risk_free_rate",
                format!("must be finite, got {}", rate),
            ));
        }
        if !volatility.is_finite() || volatility <= 0.0 {
            return Err(PricingError::invalid_parameter(
                "volatility",
                format!("must be positive and finite, got {}", volatility),
            ));
        }

        Ok(Self {
            spot,
            rate,
            volatility,
        })
    }

    /// Creates the model from validated pricing parameters.
    pub fn from_params(params: &PricingParameters) -> Result<Self, PricingError> {
        Self::new(params.spot(), params.risk_free_rate(), params.volatility())
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Computes the d1 term of the Black-Scholes formula.
    ///
    /// d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
    ///
    /// # Arguments
    /// * `strike` - Strike price (K)
    /// * `expiry` - Time to expiration in years (T), strictly positive
    #[inline]
    pub fn d1(&self, strike: f64, expiry: f64) -> f64 {
        let vol_sqrt_t = self.volatility * expiry.sqrt();
        let log_moneyness = (self.spot / strike).ln();
        let drift = (self.rate + 0.5 * self.volatility * self.volatility) * expiry;

        (log_moneyness + drift) / vol_sqrt_t
    }

    /// Computes the d2 term of the Black-Scholes formula.
    ///
    /// d₂ = d₁ - σ√T
    #[inline]
    pub fn d2(&self, strike: f64, expiry: f64) -> f64 {
        self.d1(strike, expiry) - self.volatility * expiry.sqrt()
    }

    /// Computes European call option price.
    ///
    /// C = S·N(d₁) - K·e^(-rT)·N(d₂)
    ///
    /// At or past expiry (`expiry <= 0`) the intrinsic value is returned.
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::BlackScholes;
    ///
    /// let bs = BlackScholes::new(100.0, 0.05, 0.2).unwrap();
    /// assert!(bs.price_call(100.0, 1.0) > 0.0);
    /// ```
    #[inline]
    pub fn price_call(&self, strike: f64, expiry: f64) -> f64 {
        if expiry <= 0.0 {
            return OptionType::Call.payoff(self.spot, strike);
        }

        let d1 = self.d1(strike, expiry);
        let d2 = self.d2(strike, expiry);
        let discount = (-self.rate * expiry).exp();

        self.spot * norm_cdf(d1) - strike * discount * norm_cdf(d2)
    }

    /// Computes European put option price.
    ///
    /// P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
    ///
    /// At or past expiry (`expiry <= 0`) the intrinsic value is returned.
    #[inline]
    pub fn price_put(&self, strike: f64, expiry: f64) -> f64 {
        if expiry <= 0.0 {
            return OptionType::Put.payoff(self.spot, strike);
        }

        let d1 = self.d1(strike, expiry);
        let d2 = self.d2(strike, expiry);
        let discount = (-self.rate * expiry).exp();

        strike * discount * norm_cdf(-d2) - self.spot * norm_cdf(-d1)
    }

    /// Prices a call or put.
    #[inline]
    pub fn price(&self, strike: f64, expiry: f64, option_type: OptionType) -> f64 {
        match option_type {
            OptionType::Call => self.price_call(strike, expiry),
            OptionType::Put => self.price_put(strike, expiry),
        }
    }

    /// Computes Delta (∂V/∂S).
    ///
    /// - Call Delta = N(d₁)
    /// - Put Delta = N(d₁) - 1
    #[inline]
    pub fn delta(&self, strike: f64, expiry: f64, option_type: OptionType) -> f64 {
        if expiry <= 0.0 {
            return match option_type {
                OptionType::Call if self.spot > strike => 1.0,
                OptionType::Put if self.spot < strike => -1.0,
                _ => 0.0,
            };
        }

        let n_d1 = norm_cdf(self.d1(strike, expiry));
        match option_type {
            OptionType::Call => n_d1,
            OptionType::Put => n_d1 - 1.0,
        }
    }

    /// Computes Gamma (∂²V/∂S²).
    ///
    /// Gamma = φ(d₁) / (S·σ·√T), identical for calls and puts.
    #[inline]
    pub fn gamma(&self, strike: f64, expiry: f64) -> f64 {
        if expiry <= 0.0 {
            return 0.0;
        }

        let d1 = self.d1(strike, expiry);
        norm_pdf(d1) / (self.spot * self.volatility * expiry.sqrt())
    }

    /// Computes Vega (∂V/∂σ).
    ///
    /// Vega = S·√T·φ(d₁), identical for calls and puts.
    #[inline]
    pub fn vega(&self, strike: f64, expiry: f64) -> f64 {
        if expiry <= 0.0 {
            return 0.0;
        }

        let d1 = self.d1(strike, expiry);
        self.spot * expiry.sqrt() * norm_pdf(d1)
    }

    /// Computes Theta (∂V/∂t).
    ///
    /// - Call Theta = -(S·σ·φ(d₁))/(2√T) - r·K·e^(-rT)·N(d₂)
    /// - Put Theta = -(S·σ·φ(d₁))/(2√T) + r·K·e^(-rT)·N(-d₂)
    ///
    /// Rate of change with respect to calendar time, typically negative.
    #[inline]
    pub fn theta(&self, strike: f64, expiry: f64, option_type: OptionType) -> f64 {
        if expiry <= 0.0 {
            return 0.0;
        }

        let d1 = self.d1(strike, expiry);
        let d2 = self.d2(strike, expiry);
        let discount = (-self.rate * expiry).exp();

        let decay = -(self.spot * self.volatility * norm_pdf(d1)) / (2.0 * expiry.sqrt());

        match option_type {
            OptionType::Call => decay - self.rate * strike * discount * norm_cdf(d2),
            OptionType::Put => decay + self.rate * strike * discount * norm_cdf(-d2),
        }
    }

    /// Computes Rho (∂V/∂r).
    ///
    /// - Call Rho = K·T·e^(-rT)·N(d₂)
    /// - Put Rho = -K·T·e^(-rT)·N(-d₂)
    #[inline]
    pub fn rho(&self, strike: f64, expiry: f64, option_type: OptionType) -> f64 {
        if expiry <= 0.0 {
            return 0.0;
        }

        let d2 = self.d2(strike, expiry);
        let discount = (-self.rate * expiry).exp();

        match option_type {
            OptionType::Call => strike * expiry * discount * norm_cdf(d2),
            OptionType::Put => -strike * expiry * discount * norm_cdf(-d2),
        }
    }

    /// Computes every Greek in one call.
    pub fn greeks(&self, strike: f64, expiry: f64, option_type: OptionType) -> Greeks {
        Greeks {
            delta: self.delta(strike, expiry, option_type),
            gamma: self.gamma(strike, expiry),
            vega: self.vega(strike, expiry),
            theta: self.theta(strike, expiry, option_type),
            rho: self.rho(strike, expiry, option_type),
        }
    }
}
