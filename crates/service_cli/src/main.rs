//! optionrisk - European option pricing and tail risk from the command line
//!
//! # Commands
//!
//! - `optionrisk price` - Price an option and assess the simulated distribution
//! - `optionrisk check` - Print the effective configuration

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use service_cli::commands::{self, price::PriceArgs};
use service_cli::config::{self, CliArgs, CliConfig};

/// European option pricing and tail-risk CLI
#[derive(Parser)]
#[command(name = "optionrisk")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path [default: optionrisk.toml, if present]
    #[arg(short, long, global = true, env = "OPTIONRISK_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price a European option and assess its simulated distribution
    Price(PriceArgs),

    /// Check system configuration
    Check,
}

/// Initialise tracing: `--verbose` wins, then `RUST_LOG`, then the configured level
fn init_tracing(verbose: bool, config: &CliConfig) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_filter_str()))
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut args = match &cli.command {
        Commands::Price(price) => price.overrides(),
        Commands::Check => CliArgs::default(),
    };
    args.config_file = config::resolve_config_file(cli.config);

    let config = config::build_config(&args).context("failed to load configuration")?;

    init_tracing(cli.verbose, &config);
    debug!(config_file = ?args.config_file, "Configuration loaded");

    match &cli.command {
        Commands::Price(price) => commands::price::run(price, &config)?,
        Commands::Check => commands::check::run(&config)?,
    }
    Ok(())
}
