//! Tracing initialization and subscriber setup.

use crate::Config;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default directive when neither `RUST_LOG` nor the config sets one.
const DEFAULT_LEVEL: &str = "info";

/// Builds the level filter for `config`.
///
/// `RUST_LOG` wins when it is set and parses; otherwise `trace_level` is used,
/// and an invalid `trace_level` falls back to `info`.
#[must_use]
pub fn env_filter(config: &Config) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = config.trace_level.as_deref().unwrap_or(DEFAULT_LEVEL);
        EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL))
    })
}

/// Installs a global subscriber writing to stderr.
///
/// Idempotent: only the first call in a process takes effect, later calls
/// (or a subscriber installed by the host) are left alone.
///
/// # Example
///
/// ```rust
/// use facetkit::observability::init_tracing;
/// use facetkit::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
/// init_tracing(&config);
/// ```
pub fn init_tracing(config: &Config) {
    let subscriber = tracing_subscriber::registry().with(env_filter(config)).with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .compact(),
    );

    if subscriber.try_init().is_ok() {
        tracing::debug!(trace_level = ?config.trace_level, "tracing initialized");
    }
}
