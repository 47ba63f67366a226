//! Structured logging setup and secret redaction.
//!
//! Configures the `tracing` ecosystem for the application and provides a
//! helper that keeps the Gemini API key out of log sinks, since upstream
//! error bodies occasionally echo request parameters back.

use crate::config::LoggingConfig;
use crate::error::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the global tracing subscriber for the application.
///
/// Supports two output formats:
/// - `json`: Structured JSON logs for ingestion.
/// - `pretty` (default): Human-readable, colorized output for development.
///
/// Log levels are controlled via the `RUST_LOG` environment variable or
/// the provided `LoggingConfig`.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.level));

    match config.format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().pretty())
                .init();
        }
    }

    Ok(())
}

/// Replace Gemini API keys in a string before it reaches a log sink.
///
/// Covers the two places a key shows up in practice: bare `AIza...` tokens
/// and `key=` query parameters echoed in error bodies.
pub fn sanitize(input: &str) -> String {
    let mut result = input.to_string();

    // Google API keys start with "AIza" and run to a delimiter
    while let Some(pos) = result.find("AIza") {
        let start = pos;
        let end = result[start..]
            .find(|c: char| !c.is_ascii_alphanumeric() && c != '-' && c != '_')
            .map(|i| start + i)
            .unwrap_or(result.len());
        result.replace_range(start..end, "[REDACTED_API_KEY]");
    }

    // key= query parameters
    if let Some(pos) = result.find("key=") {
        let start = pos + "key=".len();
        let end = result[start..]
            .find(|c: char| c == '&' || c.is_whitespace() || c == '"' || c == '\'')
            .map(|i| start + i)
            .unwrap_or(result.len());
        result.replace_range(start..end, "[REDACTED]");
    }

    result
}
