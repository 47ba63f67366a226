// Error types for gouache-studio

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StudioError {
    /// A transport string or payload did not match the `data:image/*;base64,` shape.
    #[error("invalid image format")]
    Decode,

    /// The model responded successfully but no content part carried image data.
    #[error("No image was returned by the model.")]
    NoImageReturned,

    /// A fault raised by the generation capability itself (network, auth,
    /// quota, capability-side rejection). Carries the upstream message as-is.
    #[error("{0}")]
    Remote(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Config parsing error: {0}")]
    ConfigParsing(#[from] config::ConfigError),
}

pub type Result<T> = std::result::Result<T, StudioError>;
