//! Application configuration.

use clap::{Args, ValueEnum};

/// Marketplace API and storage settings.
#[derive(Debug, Args)]
pub struct ApiConfig {
    /// Marketplace API base URL
    #[arg(long, env = "MARKETPLACE_API_URL", default_value = "http://localhost:8080/api")]
    pub api_url: String,

    /// Path of the persisted cart file
    #[arg(long, env = "CART_STORE_PATH", default_value = ".harvest-cart.json")]
    pub cart_path: String,
}

/// Logging output settings.
#[derive(Debug, Args)]
pub struct LoggingConfig {
    /// Log level filter when `RUST_LOG` is unset
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Log output format
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Single-line human-readable output.
    Compact,

    /// Newline-delimited JSON.
    Json,
}
