// Export bridge: save the current image through the host environment

use crate::error::Result;
use crate::image::ImagePayload;
use std::fs;
use std::path::PathBuf;
use tracing::info;

/// Fixed name used when the subject yields no usable slug.
pub const DEFAULT_FILE_NAME: &str = "gouache-illustration.png";

const FILE_NAME_PREFIX: &str = "gouache";

/// Host-environment save action. The core hands over a payload and a
/// suggested file name and consumes no return value beyond success.
pub trait ExportBridge {
    fn save(&self, file_name: &str, payload: &ImagePayload) -> Result<()>;
}

/// Derive a download file name from the subject text.
///
/// The subject is lowercased and runs of non-alphanumeric characters
/// collapse to a single `-`; an empty result falls back to
/// [`DEFAULT_FILE_NAME`].
pub fn derive_file_name(subject: &str, extension: &str) -> String {
    let mut slug = String::with_capacity(subject.len());
    let mut pending_separator = false;
    for c in subject.to_lowercase().chars() {
        if c.is_ascii_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(c);
        } else {
            pending_separator = true;
        }
    }
    if slug.is_empty() {
        DEFAULT_FILE_NAME.to_string()
    } else {
        format!("{}-{}.{}", FILE_NAME_PREFIX, slug, extension)
    }
}

/// Saves payloads as files under a configured directory.
pub struct FileExporter {
    output_dir: PathBuf,
}

impl FileExporter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }
}

impl ExportBridge for FileExporter {
    fn save(&self, file_name: &str, payload: &ImagePayload) -> Result<()> {
        let bytes = payload.bytes()?;
        fs::create_dir_all(&self.output_dir)?;
        let path = self.output_dir.join(file_name);
        fs::write(&path, bytes)?;
        info!(path = %path.display(), "Saved image");
        Ok(())
    }
}
