//! Pricing report assembly and rendering.
//!
//! A [`PricingReport`] gathers everything one `price` run produces: the
//! closed-form price and Greeks, the Monte Carlo estimate, and the tail-risk
//! figures read from the simulated terminal prices. It renders either as
//! text for a terminal or as a single JSON document.

use pricer_core::types::{OptionType, PricingParameters};
use pricer_models::analytical::Greeks;
use pricer_risk::RiskReport;
use serde::Serialize;
use std::fmt;

/// Width in characters of the longest histogram bar.
const BAR_WIDTH: usize = 40;

/// One equal-width histogram bucket.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HistogramBin {
    /// Inclusive lower edge.
    pub lower: f64,
    /// Upper edge; exclusive except for the last bucket.
    pub upper: f64,
    /// Number of sample elements in the bucket.
    pub count: usize,
}

/// Monte Carlo part of the report.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MonteCarloSummary {
    /// Discounted mean payoff.
    pub price: f64,
    /// Standard error of `price`.
    pub std_error: f64,
    /// 95% confidence half-width.
    pub confidence_95: f64,
    /// Number of simulated terminal prices.
    pub samples: usize,
    /// Seed that reproduces the run.
    pub seed: u64,
}

/// Everything produced by one pricing run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PricingReport {
    /// Validated market and contract inputs.
    pub inputs: PricingParameters,
    /// Black–Scholes price.
    pub analytic_price: f64,
    /// Black–Scholes sensitivities.
    pub greeks: Greeks,
    /// Simulation estimate.
    pub monte_carlo: MonteCarloSummary,
    /// VaR / ES over the terminal price sample.
    pub risk: RiskReport,
    /// Distribution of the terminal price sample.
    pub histogram: Vec<HistogramBin>,
}

/// Formats an amount as dollars with two decimals, e.g. `$10.45`.
pub fn format_currency(amount: f64) -> String {
    if amount < 0.0 {
        format!("-${:.2}", -amount)
    } else {
        format!("${:.2}", amount)
    }
}

/// Buckets `sample` into `bins` equal-width intervals spanning its range.
///
/// The last bucket includes its upper edge. A constant sample is spread over
/// `[x - 0.5, x + 0.5]`. Returns no buckets for an empty sample or `bins == 0`.
///
/// # Examples
///
/// ```rust
/// use service_cli::report::histogram;
///
/// let bins = histogram(&[1.0, 2.0, 2.5, 4.0], 3);
/// let counts: Vec<usize> = bins.iter().map(|b| b.count).collect();
/// assert_eq!(counts, vec![1, 2, 1]);
/// ```
pub fn histogram(sample: &[f64], bins: usize) -> Vec<HistogramBin> {
    if sample.is_empty() || bins == 0 {
        return Vec::new();
    }

    let (mut lo, mut hi) = sample
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &x| {
            (lo.min(x), hi.max(x))
        });
    if lo == hi {
        lo -= 0.5;
        hi += 0.5;
    }
    let width = (hi - lo) / bins as f64;

    let mut counts = vec![0usize; bins];
    for &x in sample {
        let index = (((x - lo) / width) as usize).min(bins - 1);
        counts[index] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBin {
            lower: lo + i as f64 * width,
            upper: if i + 1 == bins {
                hi
            } else {
                lo + (i + 1) as f64 * width
            },
            count,
        })
        .collect()
}

/// Text bars for a set of buckets, scaled to the fullest bucket.
#[derive(Debug, Clone, Copy)]
pub struct HistogramBars<'a>(pub &'a [HistogramBin]);

impl fmt::Display for HistogramBars<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let max = self.0.iter().map(|b| b.count).max().unwrap_or(0);

        for bin in self.0 {
            let bar = if max == 0 {
                0
            } else {
                (bin.count * BAR_WIDTH).div_ceil(max)
            };
            writeln!(
                f,
                "{:>10.2} - {:>10.2} | {:<width$} {}",
                bin.lower,
                bin.upper,
                "#".repeat(bar),
                bin.count,
                width = BAR_WIDTH
            )?;
        }
        Ok(())
    }
}

/// Renders buckets as horizontal text bars scaled to the fullest bucket.
pub fn render_histogram(bins: &[HistogramBin]) -> String {
    HistogramBars(bins).to_string()
}

fn title_case(option_type: OptionType) -> &'static str {
    match option_type {
        OptionType::Call => "Call",
        OptionType::Put => "Put",
    }
}

impl fmt::Display for PricingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inputs = &self.inputs;
        let kind = title_case(inputs.option_type());
        let mc = &self.monte_carlo;
        let greeks = &self.greeks;
        let risk = &self.risk;
        let level = (risk.confidence * 100.0).round();

        writeln!(f, "Inputs")?;
        writeln!(f, "  Spot price (S):        {}", format_currency(inputs.spot()))?;
        writeln!(f, "  Strike price (K):      {}", format_currency(inputs.strike()))?;
        writeln!(f, "  Time to maturity (T):  {}", inputs.time_to_maturity())?;
        writeln!(f, "  Risk-free rate (r):    {}", inputs.risk_free_rate())?;
        writeln!(f, "  Volatility (σ):        {}", inputs.volatility())?;
        writeln!(f)?;

        writeln!(f, "Black-Scholes Pricing")?;
        writeln!(
            f,
            "  The {} option price using Black-Scholes Model is: {}",
            kind,
            format_currency(self.analytic_price)
        )?;
        writeln!(
            f,
            "  Delta {:.4}  Gamma {:.4}  Vega {:.4}  Theta {:.4}  Rho {:.4}",
            greeks.delta, greeks.gamma, greeks.vega, greeks.theta, greeks.rho
        )?;
        writeln!(f)?;

        writeln!(f, "Monte Carlo Simulation")?;
        writeln!(
            f,
            "  The {} option price using Monte Carlo Simulation is: {} (± {:.4}, {} paths, seed {})",
            kind,
            format_currency(mc.price),
            mc.confidence_95,
            mc.samples,
            mc.seed
        )?;
        writeln!(f)?;

        writeln!(f, "Distribution of Simulated Prices at Maturity")?;
        write!(f, "{}", HistogramBars(&self.histogram))?;
        writeln!(f)?;

        writeln!(f, "Risk Assessment Metrics")?;
        writeln!(
            f,
            "  Value at Risk (VaR {}%): {}",
            level,
            format_currency(risk.value_at_risk)
        )?;
        writeln!(
            f,
            "  Expected Shortfall (ES {}%): {}",
            level,
            format_currency(risk.expected_shortfall)
        )
    }
}

/// Renders the report as terminal text.
pub fn render_table(report: &PricingReport) -> String {
    report.to_string()
}

/// Renders the report as pretty-printed JSON.
pub fn render_json(report: &PricingReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(10.450583572185565), "$10.45");
        assert_eq!(format_currency(5.573526022256971), "$5.57");
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(-1.5), "-$1.50");
    }

    #[test]
    fn test_histogram_counts_every_element() {
        let sample: Vec<f64> = (0..1000).map(|i| (i as f64 * 0.7).cos() * 20.0 + 100.0).collect();
        let bins = histogram(&sample, 50);

        assert_eq!(bins.len(), 50);
        assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), 1000);
        for pair in bins.windows(2) {
            assert_eq!(pair[0].upper, pair[1].lower);
        }
    }

    #[test]
    fn test_histogram_edges_span_sample() {
        let bins = histogram(&[3.0, 7.0, 5.0], 4);
        assert_eq!(bins[0].lower, 3.0);
        assert_eq!(bins[3].upper, 7.0);
        // Maximum lands in the last bucket
        assert_eq!(bins[3].count, 1);
        assert_eq!(bins[2].count, 1);
    }

    #[test]
    fn test_histogram_constant_sample() {
        let bins = histogram(&[2.0; 5], 2);
        assert_eq!(bins.len(), 2);
        assert_eq!(bins[0].lower, 1.5);
        assert_eq!(bins[1].upper, 2.5);
        // 2.0 sits on the shared edge, which belongs to the upper bucket
        assert_eq!(bins[1].count, 5);
    }

    #[test]
    fn test_histogram_degenerate_inputs() {
        assert!(histogram(&[], 10).is_empty());
        assert!(histogram(&[1.0, 2.0], 0).is_empty());
    }

    #[test]
    fn test_render_histogram_scales_bars() {
        let bins = [
            HistogramBin {
                lower: 0.0,
                upper: 1.0,
                count: 10,
            },
            HistogramBin {
                lower: 1.0,
                upper: 2.0,
                count: 5,
            },
        ];
        let text = render_histogram(&bins);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].matches('#').count(), BAR_WIDTH);
        assert_eq!(lines[1].matches('#').count(), BAR_WIDTH / 2);
        assert!(lines[1].ends_with(" 5"));
    }
}
