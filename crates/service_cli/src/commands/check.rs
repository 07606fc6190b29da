//! Check command implementation
//!
//! Prints the effective configuration after all sources are merged.

use std::io::Write;
use tracing::info;

use crate::config::CliConfig;
use crate::{Result, VERSION};

/// Run the check command
pub fn run(config: &CliConfig) -> Result<()> {
    info!("Checking configuration...");

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "optionrisk {}", VERSION)?;
    writeln!(stdout)?;
    writeln!(stdout, "# Effective configuration")?;
    write!(stdout, "{}", config.to_toml_string()?)?;

    if config.seed.is_none() {
        writeln!(stdout, "# seed unset: each run draws one from OS entropy")?;
    }

    info!("Configuration OK");
    Ok(())
}
