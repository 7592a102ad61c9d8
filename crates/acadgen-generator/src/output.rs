//! Output file writing.

use std::{
    fs,
    path::{Path, PathBuf},
};

use thiserror::Error;
use tracing::info;

/// Output writing errors.
#[derive(Debug, Error)]
pub enum OutputError {
    /// Failed to write an output file.
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for output operations.
pub type Result<T> = std::result::Result<T, OutputError>;

/// Write generated content to a file, overwriting any existing one.
///
/// Content is rendered fully in memory before this single write, so a
/// failed run never leaves a partially generated file behind.
pub fn write_file(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|source| OutputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), bytes = contents.len(), "wrote output file");
    Ok(())
}
