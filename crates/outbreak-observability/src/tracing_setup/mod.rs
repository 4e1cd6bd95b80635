//! Tracing setup: structured JSON logging with span definitions and event types.

pub mod events;
pub mod spans;

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directive.
pub const LOG_ENV_VAR: &str = "OUTBREAK_LOG";

/// Initialize the tracing subscriber with structured JSON output.
///
/// Respects `OUTBREAK_LOG` for filtering and defaults to `info`.
/// Does nothing if a global subscriber is already installed.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .json()
        .try_init();
}

/// Initialize tracing with an explicit filter string (for tests or embedding).
pub fn init_tracing_with_filter(filter: &str) {
    let filter = EnvFilter::new(filter);

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .json()
        .try_init();
}

/// Initialize tracing from a configured level and output format.
///
/// `OUTBREAK_LOG`, when set, overrides `log_level`. With `json_logs` false the
/// human-readable formatter is used instead.
pub fn init_tracing_from(log_level: &str, json_logs: bool) {
    let filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(log_level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    let _ = if json_logs {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
}
