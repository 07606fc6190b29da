//! Monte Carlo simulation output.

/// Outcome of one Monte Carlo simulation.
///
/// Owns the simulated terminal prices; nothing else retains a reference to
/// them once the result is returned.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::SimulationResult;
///
/// let result = SimulationResult {
///     price: 10.5,
///     std_error: 0.05,
///     terminal_prices: vec![95.0, 104.0, 121.0],
/// };
///
/// assert_eq!(result.sample_count(), 3);
/// println!("Price: {} +/- {}", result.price, result.confidence_95());
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SimulationResult {
    /// Discounted mean payoff.
    pub price: f64,
    /// Standard error of the price estimate.
    pub std_error: f64,
    /// Simulated prices at maturity, in draw order.
    pub terminal_prices: Vec<f64>,
}

impl SimulationResult {
    /// Returns the 95% confidence interval half-width.
    #[inline]
    pub fn confidence_95(&self) -> f64 {
        1.96 * self.std_error
    }

    /// Number of simulated terminal prices.
    #[inline]
    pub fn sample_count(&self) -> usize {
        self.terminal_prices.len()
    }

    /// Splits the result into the price estimate and the terminal price sample.
    #[inline]
    pub fn into_parts(self) -> (f64, Vec<f64>) {
        (self.price, self.terminal_prices)
    }
}
