//! Tail-risk figures over samples produced by the Monte Carlo engine.

use approx::assert_relative_eq;
use pricer_core::types::{OptionType, PricingError, PricingParameters, SimulationConfig};
use pricer_pricing::mc::simulate_seeded;
use pricer_risk::var::{assess, percentile};

fn simulated_sample(seed: u64, n: usize) -> Vec<f64> {
    let params = PricingParameters::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call).unwrap();
    let config = SimulationConfig::new(n).unwrap().with_seed(seed);
    simulate_seeded(&params, &config).unwrap().terminal_prices
}

#[test]
fn test_var_matches_lognormal_quantile() {
    // ln S_T ~ N(ln 100 + 0.03, 0.2²): 5% quantile = 100·exp(0.03 - 1.6448536·0.2)
    let sample = simulated_sample(42, 100_000);
    let report = assess(&sample).unwrap();

    let expected = 100.0 * (0.03_f64 - 1.6448536269514722 * 0.2).exp();
    assert_relative_eq!(report.value_at_risk, expected, max_relative = 0.01);
    assert!(report.expected_shortfall < report.value_at_risk);
    assert!(report.expected_shortfall > 0.0);
}

#[test]
fn test_report_is_reproducible_for_fixed_seed() {
    let first = assess(&simulated_sample(9, 20_000)).unwrap();
    let second = assess(&simulated_sample(9, 20_000)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_var_is_the_fifth_percentile() {
    let sample = simulated_sample(1, 5_000);
    let report = assess(&sample).unwrap();
    assert_eq!(report.value_at_risk, percentile(&sample, 5.0).unwrap());

    let below = sample.iter().filter(|&&s| s <= report.value_at_risk).count();
    // Linear interpolation puts ceil(0.05 · (n - 1)) order statistics at or below
    assert_eq!(below, 250);
}

#[test]
fn test_empty_sample_fails() {
    let empty: Vec<f64> = Vec::new();
    assert_eq!(assess(&empty), Err(PricingError::EmptySample));
}
