// Configuration module

mod models;

pub use models::*;

use crate::cli::Args;
use crate::error::{Result, StudioError};
use config::{Config, Environment, File};
use std::path::PathBuf;

impl AppConfig {
    /// Load configuration from multiple sources with precedence:
    /// 1. CLI arguments (highest, applied via [`AppConfig::apply_args`])
    /// 2. Environment variables
    /// 3. Config file
    /// 4. Defaults (lowest)
    pub fn load() -> Result<Self> {
        let config = Config::builder()
            // Start with defaults
            .add_source(Config::try_from(&Self::default())?)
            // Load from config file if it exists
            .add_source(File::with_name(&Self::default_config_path()).required(false))
            // Override with environment variables (prefix: GOUACHE_)
            .add_source(Environment::with_prefix("GOUACHE").separator("_"))
            .build()
            .map_err(|e| StudioError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| StudioError::Config(e.to_string()))
    }

    /// Apply CLI overrides on top of the loaded configuration.
    pub fn apply_args(&mut self, args: &Args) {
        if let Some(api_key) = &args.api_key {
            self.gemini.api_key = api_key.clone();
        }
        if let Some(model) = &args.model {
            self.gemini.model = model.clone();
        }
        if let Some(aspect_ratio) = &args.aspect_ratio {
            self.studio.aspect_ratio = aspect_ratio.clone();
        }
        if let Some(output_dir) = &args.output_dir {
            self.studio.output_dir = output_dir.display().to_string();
        }
    }

    fn default_config_path() -> String {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".gouache-studio")
            .join("config.toml")
            .to_string_lossy()
            .to_string()
    }
}
