//! Monte Carlo pricing engine.
//!
//! # Overview
//!
//! [`simulate`] coordinates:
//! 1. Random number generation (via any [`NormalSource`])
//! 2. Terminal price generation (via [`GbmParams::fill_terminal_prices`])
//! 3. Payoff computation and discounting
//! 4. Standard error of the estimate
//!
//! The terminal prices are returned to the caller alongside the price so that
//! risk figures can be derived from the same simulated distribution.

use pricer_core::types::{PricingError, PricingParameters, SimulationConfig};
use tracing::debug;

use super::paths::GbmParams;
use super::result::SimulationResult;
use crate::rng::{NormalSource, PricerRng};

/// Prices a European option by Monte Carlo simulation.
///
/// Draws `config.sample_count()` standard normals from `rng`, maps them to
/// terminal prices, and discounts the mean payoff. The seed stored in
/// `config` is not consulted; the caller owns the random source.
///
/// # Errors
///
/// Never fails for validated inputs; the `Result` keeps the signature aligned
/// with the textual entry point [`simulate_str`].
///
/// # Examples
///
/// ```rust
/// use pricer_core::types::{OptionType, PricingParameters, SimulationConfig};
/// use pricer_pricing::mc::simulate;
/// use pricer_pricing::rng::PricerRng;
///
/// let params = PricingParameters::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call).unwrap();
/// let config = SimulationConfig::new(10_000).unwrap();
/// let mut rng = PricerRng::from_seed(42);
///
/// let result = simulate(&params, &config, &mut rng).unwrap();
/// assert_eq!(result.terminal_prices.len(), 10_000);
/// assert!((result.price - 10.45).abs() < 4.0 * result.std_error);
/// ```
pub fn simulate<R: NormalSource + ?Sized>(
    params: &PricingParameters,
    config: &SimulationConfig,
    rng: &mut R,
) -> Result<SimulationResult, PricingError> {
    let n = config.sample_count();
    let gbm = GbmParams::from(params);
    let option_type = params.option_type();
    let strike = params.strike();
    let discount_factor = params.discount_factor();

    let mut terminal_prices = vec![0.0; n];
    rng.fill_normal(&mut terminal_prices);
    gbm.fill_terminal_prices(&mut terminal_prices);

    // Aggregate: discounted mean and standard error
    let sum: f64 = terminal_prices
        .iter()
        .map(|&s| option_type.payoff(s, strike))
        .sum();
    let mean = sum / n as f64;

    let std_error = if n > 1 {
        let variance = terminal_prices
            .iter()
            .map(|&s| (option_type.payoff(s, strike) - mean).powi(2))
            .sum::<f64>()
            / (n - 1) as f64;
        variance.sqrt() / (n as f64).sqrt()
    } else {
        0.0
    };

    let result = SimulationResult {
        price: mean * discount_factor,
        std_error: std_error * discount_factor,
        terminal_prices,
    };

    debug!(
        samples = n,
        option_type = %option_type,
        price = result.price,
        std_error = result.std_error,
        "Monte Carlo simulation complete"
    );

    Ok(result)
}

/// Runs [`simulate`] with a [`PricerRng`] built from the configuration.
///
/// Uses `config.seed()` when set; otherwise the generator is seeded from
/// operating-system entropy and the drawn seed is logged at debug level so
/// the run can be replayed.
pub fn simulate_seeded(
    params: &PricingParameters,
    config: &SimulationConfig,
) -> Result<SimulationResult, PricingError> {
    let mut rng = match config.seed() {
        Some(seed) => PricerRng::from_seed(seed),
        None => PricerRng::from_entropy(),
    };
    debug!(seed = rng.seed(), "Initialised simulation RNG");

    simulate(params, config, &mut rng)
}

/// Runs a seeded simulation for an option type given as text.
///
/// # Errors
///
/// - `PricingError::InvalidOptionType` unless `option_type` is `"call"` or `"put"`
/// - `PricingError::InvalidParameter` for out-of-domain numeric inputs
///
/// # Examples
///
/// ```rust
/// use pricer_core::types::{PricingError, SimulationConfig};
/// use pricer_pricing::mc::simulate_str;
///
/// let config = SimulationConfig::new(100).unwrap().with_seed(1);
/// let err = simulate_str(100.0, 100.0, 1.0, 0.05, 0.2, "invalid", &config).unwrap_err();
/// assert!(matches!(err, PricingError::InvalidOptionType(_)));
/// ```
pub fn simulate_str(
    spot: f64,
    strike: f64,
    time_to_maturity: f64,
    risk_free_rate: f64,
    volatility: f64,
    option_type: &str,
    config: &SimulationConfig,
) -> Result<SimulationResult, PricingError> {
    let params = PricingParameters::parse(
        spot,
        strike,
        time_to_maturity,
        risk_free_rate,
        volatility,
        option_type,
    )?;
    simulate_seeded(&params, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pricer_core::types::OptionType;

    /// Replays a fixed list of variates, cycling when exhausted.
    struct Scripted {
        values: Vec<f64>,
        index: usize,
    }

    impl Scripted {
        fn new(values: Vec<f64>) -> Self {
            Self { values, index: 0 }
        }
    }

    impl NormalSource for Scripted {
        fn next_normal(&mut self) -> f64 {
            let value = self.values[self.index % self.values.len()];
            self.index += 1;
            value
        }
    }

    fn standard_params(option_type: OptionType) -> PricingParameters {
        PricingParameters::new(100.0, 100.0, 1.0, 0.05, 0.2, option_type).unwrap()
    }

    #[test]
    fn test_sample_length_matches_config() {
        let params = standard_params(OptionType::Call);
        for n in [1, 2, 17, 5_000] {
            let config = SimulationConfig::new(n).unwrap();
            let mut rng = PricerRng::from_seed(5);
            let result = simulate(&params, &config, &mut rng).unwrap();
            assert_eq!(result.terminal_prices.len(), n);
            assert!(result.terminal_prices.iter().all(|&s| s >= 0.0));
        }
    }

    #[test]
    fn test_deterministic_with_same_seed() {
        let params = standard_params(OptionType::Put);
        let config = SimulationConfig::new(2_000).unwrap();

        let result1 = simulate(&params, &config, &mut PricerRng::from_seed(42)).unwrap();
        let result2 = simulate(&params, &config, &mut PricerRng::from_seed(42)).unwrap();

        assert_eq!(result1, result2);
    }

    #[test]
    fn test_seeded_config_is_deterministic() {
        let params = standard_params(OptionType::Call);
        let config = SimulationConfig::new(1_000).unwrap().with_seed(2024);

        let result1 = simulate_seeded(&params, &config).unwrap();
        let result2 = simulate_seeded(&params, &config).unwrap();
        let direct = simulate(&params, &config, &mut PricerRng::from_seed(2024)).unwrap();

        assert_eq!(result1, result2);
        assert_eq!(result1, direct);
    }

    #[test]
    fn test_scripted_variates_give_exact_price() {
        // Z = ±1 symmetric pair: price is the discounted average of two payoffs
        let params = standard_params(OptionType::Call);
        let config = SimulationConfig::new(2).unwrap();
        let mut source = Scripted::new(vec![1.0, -1.0]);

        let result = simulate(&params, &config, &mut source).unwrap();

        let gbm = GbmParams::from(&params);
        let up = gbm.terminal_price(1.0);
        let down = gbm.terminal_price(-1.0);
        assert_eq!(result.terminal_prices, vec![up, down]);

        let expected = (-0.05_f64).exp() * 0.5 * ((up - 100.0).max(0.0) + (down - 100.0).max(0.0));
        assert_relative_eq!(result.price, expected, epsilon = 1e-12);
    }

    #[test]
    fn test_single_sample_has_zero_std_error() {
        let params = standard_params(OptionType::Put);
        let config = SimulationConfig::new(1).unwrap();
        let mut source = Scripted::new(vec![-2.0]);

        let result = simulate(&params, &config, &mut source).unwrap();
        assert_eq!(result.std_error, 0.0);
        assert!(result.price > 0.0);
    }

    #[test]
    fn test_pathwise_put_call_parity() {
        // Same draws: C - P = e^(-rT) · mean(S_T - K) exactly
        let config = SimulationConfig::new(10_000).unwrap();
        let call =
            simulate(&standard_params(OptionType::Call), &config, &mut PricerRng::from_seed(8))
                .unwrap();
        let put =
            simulate(&standard_params(OptionType::Put), &config, &mut PricerRng::from_seed(8))
                .unwrap();

        assert_eq!(call.terminal_prices, put.terminal_prices);

        let n = call.terminal_prices.len() as f64;
        let mean_forward = call.terminal_prices.iter().map(|s| s - 100.0).sum::<f64>() / n;
        assert_relative_eq!(
            call.price - put.price,
            (-0.05_f64).exp() * mean_forward,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_sample_mean_matches_forward() {
        // E[S_T] = S·e^(rT) under the risk-neutral measure
        let params = standard_params(OptionType::Call);
        let config = SimulationConfig::new(100_000).unwrap();
        let result = simulate(&params, &config, &mut PricerRng::from_seed(77)).unwrap();

        let n = result.terminal_prices.len() as f64;
        let mean = result.terminal_prices.iter().sum::<f64>() / n;
        // sd(S_T) ≈ 21, so the standard error of the mean is ≈ 0.07
        assert!((mean - 100.0 * 0.05_f64.exp()).abs() < 0.35, "mean = {}", mean);
    }

    #[test]
    fn test_simulate_str() {
        let config = SimulationConfig::new(500).unwrap().with_seed(3);
        let textual = simulate_str(100.0, 100.0, 1.0, 0.05, 0.2, "CALL", &config).unwrap();
        let typed = simulate_seeded(&standard_params(OptionType::Call), &config).unwrap();
        assert_eq!(textual, typed);

        assert_eq!(
            simulate_str(100.0, 100.0, 1.0, 0.05, 0.2, "invalid", &config),
            Err(PricingError::InvalidOptionType("invalid".to_string()))
        );
        assert!(matches!(
            simulate_str(100.0, 100.0, 0.0, 0.05, 0.2, "put", &config),
            Err(PricingError::InvalidParameter {
                name: "time_to_maturity",
                ..
            })
        ));
    }
}
