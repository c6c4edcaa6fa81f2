//! Logging setup shared by the server and the seed tool
//!
//! Each entry point parses a [`LogLevel`] once at start-up and hands it to
//! [`init`]. An explicit `RUST_LOG` takes precedence over the level.

use todo_shared_config::LogLevel;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Build the filter for a level, honouring `RUST_LOG` when it is set
pub fn build_filter(level: LogLevel) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.filter_directive()))
}

/// Install the global tracing subscriber
///
/// Returns an error if a subscriber is already installed.
pub fn init(level: LogLevel) -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(build_filter(level))
        .with(fmt::layer())
        .try_init()?;

    tracing::debug!(
        log_level = %level,
        level = level.severity(),
        "LOG_LEVEL"
    );

    Ok(())
}
