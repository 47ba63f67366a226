// gouache-studio - interactive gouache illustration generator for the Gemini image API

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod gemini;
pub mod image;
pub mod models;
pub mod prompt;
pub mod session;
pub mod utils;
