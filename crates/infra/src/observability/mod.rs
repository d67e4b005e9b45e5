//! Logging setup
//!
//! Installs a `tracing-subscriber` fmt subscriber. `RUST_LOG` takes
//! precedence over the configured default level.

use swipedeck_domain::{Result, SwipeDeckError};
use tracing_subscriber::EnvFilter;

/// Install the global subscriber.
///
/// Safe to call more than once; later calls leave the first subscriber in
/// place and return `Ok(())`.
///
/// # Errors
/// Returns `SwipeDeckError::Config` if `default_level` is not a valid filter
/// directive and `RUST_LOG` is unset.
pub fn init_tracing(default_level: &str) -> Result<()> {
    let filter = build_filter(default_level)?;

    if tracing_subscriber::fmt().with_env_filter(filter).with_target(true).try_init().is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
    Ok(())
}

fn build_filter(default_level: &str) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(default_level).map_err(|e| {
        SwipeDeckError::Config(format!("Invalid log level '{}': {}", default_level, e))
    })
}
