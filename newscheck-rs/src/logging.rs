//! Tracing subscriber setup shared by the server and the offline jobs

use tracing_subscriber::{fmt, EnvFilter};

use crate::config::LoggingConfig;

/// Initialize the global subscriber.
///
/// `RUST_LOG` takes precedence over the configured level.
pub fn init_tracing(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.level));

    let builder = fmt().with_env_filter(filter).with_target(true);

    if config.format == "json" {
        builder.json().init();
    } else {
        builder.pretty().init();
    }
}
