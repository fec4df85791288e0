//! Runtime configuration. Command-line flags win over environment variables,
//! which win over the built-in defaults; clap resolves that ordering for us.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use directories::BaseDirs;
use thiserror::Error;

/// Folder name used beneath the user's home directory for the log file.
const DATA_DIR_NAME: &str = ".profile-card";
/// Log file name stored inside the data directory.
const LOG_FILE_NAME: &str = "profile-card.log";

#[derive(Parser, Debug, Clone)]
#[command(
    name = "profile-card",
    about = "Fill in a profile, validate it, and show it as a card",
    version
)]
pub struct Cli {
    /// Tracing filter, e.g. `info` or `profile_card=debug`
    #[arg(long, env = "PROFILE_CARD_LOG", default_value = "info")]
    pub log_level: String,
    /// Where to write the log (defaults to ~/.profile-card/profile-card.log)
    #[arg(long, env = "PROFILE_CARD_LOG_FILE")]
    pub log_file: Option<PathBuf>,
    /// How long notifications stay visible, in milliseconds
    #[arg(long, env = "PROFILE_CARD_TOAST_MS", default_value_t = 2000)]
    pub toast_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub telemetry: TelemetryConfig,
    pub toast_duration: Duration,
}

/// Where and how verbosely to log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelemetryConfig {
    pub log_level: String,
    pub log_file: PathBuf,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not locate home directory for the log file")]
    NoHomeDirectory,
    #[error("toast duration must be greater than zero")]
    ZeroToastDuration,
}

impl AppConfig {
    /// Load `.env`, parse the process arguments, and resolve defaults.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_cli(Cli::parse())
    }

    pub fn from_cli(cli: Cli) -> Result<Self, ConfigError> {
        if cli.toast_ms == 0 {
            return Err(ConfigError::ZeroToastDuration);
        }
        let log_file = match cli.log_file {
            Some(path) => path,
            None => default_log_path()?,
        };

        Ok(Self {
            telemetry: TelemetryConfig {
                log_level: cli.log_level,
                log_file,
            },
            toast_duration: Duration::from_millis(cli.toast_ms),
        })
    }
}

/// Resolve the log path inside the user's home.
fn default_log_path() -> Result<PathBuf, ConfigError> {
    let base_dirs = BaseDirs::new().ok_or(ConfigError::NoHomeDirectory)?;
    Ok(base_dirs.home_dir().join(DATA_DIR_NAME).join(LOG_FILE_NAME))
}
