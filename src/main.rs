//! Binary entry point that glues configuration, logging and the TUI together.
//! The order matters: settings are resolved first because they name the log
//! file, the subscriber is installed next so start-up is already traced, and
//! only then does the terminal switch to raw mode for the event loop.
use anyhow::Context;
use profile_card::{run_app, telemetry, App, AppConfig};
use tracing::info;

/// Resolve settings, start file logging, and run the Ratatui event loop.
///
/// Returning a `Result` surfaces start-up problems (an unusable log path, a
/// bad filter string, a terminal that refuses raw mode) on stderr instead of
/// leaving the user with a half-initialised screen.
fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("failed to load configuration")?;
    telemetry::init(&config.telemetry).context("failed to initialise logging")?;
    info!(log_file = %config.telemetry.log_file.display(), "profile card starting");

    let mut app = App::new(config.toast_duration);
    run_app(&mut app)
}
