use std::fs::{self, OpenOptions};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

use super::config_io::state_dir;

/// Environment variable holding an `EnvFilter` directive
pub const LOG_ENV: &str = "CHECKOFF_LOG";

fn env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("checkoff=debug,warn")
        } else {
            EnvFilter::new("warn")
        }
    })
}

/// Log to stderr (CLI commands).
pub fn init_cli(verbose: bool) {
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time();
    let _ = tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(layer)
        .try_init();
}

/// Log to `<state dir>/checkoff.log` so output never lands on the TUI's
/// alternate screen. If the log file can't be opened, logging is off.
pub fn init_tui(verbose: bool) {
    let dir = state_dir();
    if fs::create_dir_all(&dir).is_err() {
        return;
    }
    let Ok(file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join("checkoff.log"))
    else {
        return;
    };
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false);
    let _ = tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(layer)
        .try_init();
}
