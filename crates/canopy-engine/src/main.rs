//! Text-mode presentation layer for the Canopy virtual forest.
//!
//! Stands in for the map UI: it reads one command per line from stdin and
//! prints the state the map would draw.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `CANOPY_CONFIG` or `canopy-config.yaml`
//! 2. Initialize structured logging (tracing) on stderr
//! 3. Build the session and restore the check-in key
//! 4. Run the command loop until `quit` or end of input

mod command;
mod error;
mod render;
mod shell;

use std::path::PathBuf;

use canopy_core::config::LoggingConfig;
use canopy_core::{CanopyConfig, Session};
use chrono::Utc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::error::EngineError;

/// Environment variable naming the configuration file.
const CONFIG_PATH_ENV: &str = "CANOPY_CONFIG";

/// Default configuration file, relative to the working directory.
const DEFAULT_CONFIG_PATH: &str = "canopy-config.yaml";

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration cannot be loaded, the session cannot
/// be built, or the terminal cannot be read or written.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Load configuration.
    let config_path = config_path();
    let config = CanopyConfig::load_or_default(&config_path).map_err(EngineError::from)?;

    // 2. Initialize structured logging.
    init_logging(&config.logging);
    info!(
        path = %config_path.display(),
        policy = ?config.session.policy,
        maturity_bonus = config.growth.maturity_bonus,
        enforce_daily_cap = config.growth.enforce_daily_cap,
        "Configuration loaded"
    );

    // 3. Build the session.
    let mut session = Session::from_config(&config).map_err(EngineError::from)?;

    // 4. Run the command loop.
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    shell::run(
        &mut session,
        config.growth.score_target,
        stdin.lock(),
        stdout.lock(),
        Utc::now,
    )?;

    info!(
        score = session.score(),
        roster = session.roster().len(),
        "canopy-engine exiting"
    );
    Ok(())
}

fn config_path() -> PathBuf {
    std::env::var(CONFIG_PATH_ENV)
        .ok()
        .filter(|p| !p.trim().is_empty())
        .map_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from)
}

fn init_logging(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true);
    if logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
}
