//! Cross-cutting helpers.
//!
//! # Submodules
//!
//! - `logging`: Tracing initialization and API-key redaction for log output.

pub mod logging;
