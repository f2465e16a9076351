//! Logger setup for room-probe binaries.
//!
//! Log lines go to standard output. `RUST_LOG` takes precedence over the
//! level passed by the caller.

use tracing_subscriber::{EnvFilter, fmt};

/// WebSocket library targets that are noisy below `info`.
const QUIET_TARGETS: [&str; 2] = ["tungstenite", "tokio_tungstenite"];

/// Initialize the global tracing subscriber.
///
/// # Arguments
///
/// * `bin_name` - Name of the running binary, recorded in the first log line
/// * `default_level` - Filter used when `RUST_LOG` is unset (e.g. `"info"`)
pub fn setup_logger(bin_name: &str, default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(default_level)));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stdout)
        .with_target(false)
        .init();

    tracing::debug!("logger initialized for '{}'", bin_name);
}

/// Build the fallback filter directives for `default_level`.
pub fn default_directives(default_level: &str) -> String {
    let mut directives = default_level.to_string();
    for target in QUIET_TARGETS {
        directives.push_str(&format!(",{target}=info"));
    }
    directives
}
