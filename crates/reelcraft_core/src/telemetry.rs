//! Tracing subscriber setup shared by binaries and integration tests.

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber for the current process.
///
/// Sets up a human-readable fmt layer filtered by the `RUST_LOG` environment
/// variable, falling back to `default_level` when the variable is unset.
/// Safe to call once per process; returns an error if a subscriber is
/// already installed.
///
/// # Errors
///
/// Returns error if subscriber initialization fails.
pub fn init_telemetry(default_level: LevelFilter) -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_filter(filter);

    tracing_subscriber::registry().with(fmt_layer).try_init()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_telemetry_installs_once() {
        assert!(init_telemetry(LevelFilter::DEBUG).is_ok());
        // a second install must be refused, not panic
        assert!(init_telemetry(LevelFilter::INFO).is_err());
    }
}
