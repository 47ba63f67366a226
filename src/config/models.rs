//! Configuration data structures for gouache-studio.
//!
//! Defines the settings schema: upstream Gemini API parameters, studio
//! defaults (aspect ratio, output directory), and logging options.

use serde::{Deserialize, Serialize};

/// The root configuration object for the application.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Upstream Gemini API settings.
    #[serde(default)]
    pub gemini: GeminiConfig,

    /// Generation defaults and export settings.
    #[serde(default)]
    pub studio: StudioConfig,

    /// Logging and observability settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Settings for the upstream Gemini API connection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    /// Base URL for the Generative Language API.
    /// Default: `https://generativelanguage.googleapis.com/v1beta`
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// The image model identifier. One fixed model per session.
    /// Default: `gemini-2.5-flash-image-preview`
    #[serde(default = "default_model")]
    pub model: String,

    /// Connection and request timeout in seconds.
    /// Default: `120`
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,

    /// API key. Empty by default; absence surfaces as a remote error on the
    /// first call rather than being checked up front.
    #[serde(default)]
    pub api_key: String,
}

/// Generation defaults and export settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudioConfig {
    /// Aspect ratio directive sent with every generation.
    /// Default: `1:1`
    #[serde(default = "default_aspect_ratio")]
    pub aspect_ratio: String,

    /// Directory where saved images are written.
    /// Default: current directory.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}

/// Settings for application logging and output format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Minimum log level (`trace`, `debug`, `info`, `warn`, `error`).
    /// Default: `info`
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format for logs (`pretty`, `json`).
    /// Default: `pretty`
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_api_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_model() -> String {
    "gemini-2.5-flash-image-preview".to_string()
}

fn default_timeout() -> u64 {
    120
}

fn default_aspect_ratio() -> String {
    "1:1".to_string()
}

fn default_output_dir() -> String {
    ".".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            model: default_model(),
            timeout_seconds: default_timeout(),
            api_key: String::new(),
        }
    }
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            aspect_ratio: default_aspect_ratio(),
            output_dir: default_output_dir(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}
