//! Logging subscriber initialisation.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{LogFormat, LoggingConfig};

/// Initialise the global tracing subscriber from the logging settings.
///
/// `RUST_LOG` wins over the configured level when set.
pub fn init_subscriber(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    match config.log_format {
        LogFormat::Compact => {
            tracing_subscriber::registry()
                .with(tracing_subscriber::fmt::layer().compact().with_target(true))
                .with(filter)
                .init();
        }
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_current_span(true)
                        .with_target(true),
                )
                .with(filter)
                .init();
        }
    }
}
