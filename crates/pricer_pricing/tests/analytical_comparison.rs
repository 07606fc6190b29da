//! Analytical comparison tests for Monte Carlo pricing.
//!
//! These tests verify that Monte Carlo prices converge to the Black-Scholes
//! closed form for European options.
//!
//! # Test Categories
//!
//! 1. **Convergence**: MC within a few standard errors of the analytical price
//! 2. **Error scaling**: Standard error shrinks like 1/√n
//! 3. **Sample shape**: Length and sign of the terminal price sample

use pricer_core::types::{OptionType, PricingParameters, SimulationConfig};
use pricer_models::analytical::black_scholes;
use pricer_pricing::mc::{simulate, simulate_seeded};
use pricer_pricing::rng::PricerRng;

/// Standard test parameters for comparison tests.
fn standard_params(option_type: OptionType) -> PricingParameters {
    PricingParameters::new(100.0, 100.0, 1.0, 0.05, 0.2, option_type).unwrap()
}

fn assert_converges(params: PricingParameters, seed: u64) {
    let analytical_price = black_scholes::price(&params).unwrap();

    let config = SimulationConfig::new(100_000).unwrap().with_seed(seed);
    let result = simulate_seeded(&params, &config).unwrap();

    // MC should be within 4 standard errors of analytical
    let tolerance = 4.0 * result.std_error;
    let error = (result.price - analytical_price).abs();

    assert!(
        error < tolerance,
        "{:?}: MC={:.4}, Analytical={:.4}, Error={:.4}, Tolerance={:.4}",
        params.option_type(),
        result.price,
        analytical_price,
        error,
        tolerance
    );
}

// ============================================================================
// Convergence Tests
// ============================================================================

#[test]
fn test_atm_call_mc_vs_analytical() {
    assert_converges(standard_params(OptionType::Call), 42);
}

#[test]
fn test_atm_put_mc_vs_analytical() {
    assert_converges(standard_params(OptionType::Put), 42);
}

#[test]
fn test_itm_call_mc_vs_analytical() {
    let params = PricingParameters::new(120.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call).unwrap();
    assert_converges(params, 7);
}

#[test]
fn test_otm_put_short_dated_mc_vs_analytical() {
    let params = PricingParameters::new(100.0, 90.0, 0.25, 0.03, 0.35, OptionType::Put).unwrap();
    assert_converges(params, 11);
}

#[test]
fn test_zero_rate_high_vol_mc_vs_analytical() {
    let params = PricingParameters::new(50.0, 55.0, 2.0, 0.0, 0.6, OptionType::Call).unwrap();
    assert_converges(params, 19);
}

// ============================================================================
// Error Scaling Tests
// ============================================================================

#[test]
fn test_std_error_shrinks_with_sample_count() {
    let params = standard_params(OptionType::Call);

    let small = SimulationConfig::new(2_500).unwrap();
    let large = SimulationConfig::new(40_000).unwrap();

    let small_result = simulate(&params, &small, &mut PricerRng::from_seed(3)).unwrap();
    let large_result = simulate(&params, &large, &mut PricerRng::from_seed(3)).unwrap();

    // 16x the samples: standard error should drop by roughly 4x
    let ratio = small_result.std_error / large_result.std_error;
    assert!(
        (3.0..5.0).contains(&ratio),
        "std error ratio {:.3} outside [3, 5)",
        ratio
    );
}

// ============================================================================
// Sample Shape Tests
// ============================================================================

#[test]
fn test_terminal_sample_shape() {
    let params = PricingParameters::new(10.0, 12.0, 3.0, 0.01, 0.9, OptionType::Put).unwrap();
    let config = SimulationConfig::new(25_000).unwrap().with_seed(99);

    let result = simulate_seeded(&params, &config).unwrap();

    assert_eq!(result.terminal_prices.len(), 25_000);
    assert!(result.terminal_prices.iter().all(|&s| s >= 0.0 && s.is_finite()));
    assert!(result.price >= 0.0);
}
