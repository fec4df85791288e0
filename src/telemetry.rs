//! Tracing setup. The terminal belongs to the UI, so log lines go to a file
//! instead of stderr.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use thiserror::Error;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

use crate::config::TelemetryConfig;

#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("invalid log level/filter '{value}': unable to build EnvFilter")]
    EnvFilter {
        value: String,
        #[source]
        source: ParseError,
    },
    #[error("failed to open log file {path}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("telemetry error: {0}")]
    Subscriber(Box<dyn std::error::Error + Send + Sync>),
}

/// Install the global subscriber. `RUST_LOG` takes precedence over the
/// configured level.
pub fn init(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => {
            EnvFilter::try_new(&config.log_level).map_err(|source| TelemetryError::EnvFilter {
                value: config.log_level.clone(),
                source,
            })?
        }
    };

    let file = open_log_file(config)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(TelemetryError::Subscriber)
}

fn open_log_file(config: &TelemetryConfig) -> Result<File, TelemetryError> {
    let path = &config.log_file;
    let wrap = |source| TelemetryError::LogFile {
        path: path.clone(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(wrap)?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(wrap)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_missing_log_directory() {
        let dir = std::env::temp_dir().join(format!("profile-card-test-{}", std::process::id()));
        let config = TelemetryConfig {
            log_level: "info".into(),
            log_file: dir.join("nested").join("app.log"),
        };

        open_log_file(&config).expect("log file opens");
        assert!(config.log_file.exists());
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn bad_filter_is_reported() {
        let config = TelemetryConfig {
            log_level: "profile_card=loud".into(),
            log_file: PathBuf::from("unused.log"),
        };
        std::env::remove_var("RUST_LOG");
        assert!(matches!(
            init(&config),
            Err(TelemetryError::EnvFilter { .. })
        ));
    }
}
