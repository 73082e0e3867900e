//! Log facade initialization.
//!
//! Routes `log` records to the file selected by the settings: the dev
//! log in debug mode, the production log otherwise. The accessor only
//! names the path; creating and appending to the file happens here.

use std::fs::OpenOptions;

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};

use crate::config::Settings;

/// Installs the global logger for the process.
///
/// Records are appended to [`Settings::log_file`], which is created on
/// first use. The default level is `debug` in debug mode and `info`
/// otherwise; `RUST_LOG` overrides it.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened or a logger was
/// already installed.
pub fn init(settings: &Settings) -> Result<()> {
    let path = settings.log_file();
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    let default_level = if settings.is_debug() { "debug" } else { "info" };

    Builder::from_env(Env::default().default_filter_or(default_level))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_secs()
        .try_init()
        .context("logger already initialized")?;

    Ok(())
}
