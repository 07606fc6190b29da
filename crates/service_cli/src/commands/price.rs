//! Price command implementation
//!
//! Prices one European option in closed form and by simulation, then reads
//! tail-risk figures from the simulated terminal prices.

use clap::Args;
use std::io::Write;
use tracing::info;

use pricer_core::types::{PricingParameters, SimulationConfig};
use pricer_models::analytical::black_scholes;
use pricer_pricing::mc::simulate;
use pricer_pricing::rng::PricerRng;
use pricer_risk::var;

use crate::config::{CliArgs, CliConfig, OutputFormat};
use crate::report::{self, MonteCarloSummary, PricingReport};
use crate::{CliError, Result};

/// Arguments of `optionrisk price`
#[derive(Debug, Clone, Args)]
pub struct PriceArgs {
    /// Current price of the underlying (S)
    #[arg(long, default_value_t = 100.0)]
    pub spot: f64,

    /// Strike price (K)
    #[arg(long, default_value_t = 100.0)]
    pub strike: f64,

    /// Time to maturity in years (T)
    #[arg(long, default_value_t = 1.0)]
    pub maturity: f64,

    /// Continuously compounded risk-free rate (r)
    #[arg(long, default_value_t = 0.05)]
    pub rate: f64,

    /// Annualised volatility (σ)
    #[arg(long, default_value_t = 0.2)]
    pub volatility: f64,

    /// Option type: call or put
    #[arg(short = 't', long, default_value = "call")]
    pub option_type: String,

    /// Number of Monte Carlo simulations [default: 10000]
    #[arg(short = 'n', long)]
    pub simulations: Option<usize>,

    /// RNG seed for a reproducible run
    #[arg(long)]
    pub seed: Option<u64>,

    /// Histogram buckets in table output [default: 50]
    #[arg(long)]
    pub bins: Option<usize>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

impl PriceArgs {
    /// Configuration overrides carried by these arguments
    pub fn overrides(&self) -> CliArgs {
        CliArgs {
            config_file: None,
            simulations: self.simulations,
            seed: self.seed,
            histogram_bins: self.bins,
            format: self.format,
        }
    }

    /// Applies the accepted input ranges before anything is priced
    pub fn check_bounds(&self) -> Result<()> {
        let bounds = [
            ("spot", self.spot, 0.0),
            ("strike", self.strike, 0.0),
            ("maturity", self.maturity, 0.01),
            ("rate", self.rate, 0.0),
            ("volatility", self.volatility, 0.01),
        ];

        for (name, value, min) in bounds {
            if !value.is_finite() || value < min {
                return Err(CliError::InvalidArgument(format!(
                    "--{} must be at least {}, got {}",
                    name, min, value
                )));
            }
        }
        Ok(())
    }

    /// Validated pricing inputs
    pub fn parameters(&self) -> Result<PricingParameters> {
        self.check_bounds()?;
        Ok(PricingParameters::parse(
            self.spot,
            self.strike,
            self.maturity,
            self.rate,
            self.volatility,
            &self.option_type,
        )?)
    }
}

/// Prices `params` under `config` and assembles the full report
pub fn evaluate(params: &PricingParameters, config: &CliConfig) -> Result<PricingReport> {
    let analytic_price = black_scholes::price(params)?;
    let greeks = black_scholes::greeks(params)?;

    let mut rng = match config.seed {
        Some(seed) => PricerRng::from_seed(seed),
        None => PricerRng::from_entropy(),
    };
    let seed = rng.seed();
    let sim_config = SimulationConfig::new(config.simulations)?.with_seed(seed);
    let result = simulate(params, &sim_config, &mut rng)?;

    let risk = var::assess(&result.terminal_prices)?;
    let histogram = report::histogram(&result.terminal_prices, config.histogram_bins);

    Ok(PricingReport {
        inputs: *params,
        analytic_price,
        greeks,
        monte_carlo: MonteCarloSummary {
            price: result.price,
            std_error: result.std_error,
            confidence_95: result.confidence_95(),
            samples: result.sample_count(),
            seed,
        },
        risk,
        histogram,
    })
}

/// Run the price command
pub fn run(args: &PriceArgs, config: &CliConfig) -> Result<()> {
    let params = args.parameters()?;

    info!(
        option_type = %params.option_type(),
        simulations = config.simulations,
        "Starting pricing"
    );

    let report = evaluate(&params, config)?;

    let rendered = match config.format {
        OutputFormat::Table => report::render_table(&report),
        OutputFormat::Json => report::render_json(&report)?,
    };

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", rendered)?;

    info!(
        analytic = report.analytic_price,
        monte_carlo = report.monte_carlo.price,
        seed = report.monte_carlo.seed,
        "Pricing complete"
    );
    Ok(())
}
