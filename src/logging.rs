use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("invalid log filter {filter:?}: {reason}")]
    InvalidFilter { filter: String, reason: String },

    #[error("failed to initialize logging: {0}")]
    Init(String),
}

/// Build the filter: `RUST_LOG` if set, otherwise `default_filter`.
pub fn env_filter(default_filter: &str) -> Result<EnvFilter, LoggingError> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(default_filter).map_err(|e| LoggingError::InvalidFilter {
            filter: default_filter.to_string(),
            reason: e.to_string(),
        }),
    }
}

/// Install the global console subscriber. Call once, at startup.
pub fn init(default_filter: &str) -> Result<(), LoggingError> {
    let console_layer = fmt::layer()
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_filter(env_filter(default_filter)?);

    tracing_subscriber::registry()
        .with(console_layer)
        .try_init()
        .map_err(|e| LoggingError::Init(e.to_string()))
}
