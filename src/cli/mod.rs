// CLI module for gouache-studio

use clap::Parser;
use std::path::PathBuf;

/// gouache-studio - turn a subject description into a gouache illustration,
/// then refine it with natural language
#[derive(Parser, Debug)]
#[command(name = "gouache-studio", version, about, long_about = None)]
pub struct Args {
    /// Subject to illustrate immediately on startup
    pub subject: Option<String>,

    /// Gemini API key (overrides the config file)
    #[arg(long, env = "GEMINI_API_KEY")]
    pub api_key: Option<String>,

    /// Image model identifier
    #[arg(long)]
    pub model: Option<String>,

    /// Aspect ratio directive (e.g. "1:1", "16:9")
    #[arg(long)]
    pub aspect_ratio: Option<String>,

    /// Directory where saved images are written
    #[arg(long)]
    pub output_dir: Option<PathBuf>,
}
