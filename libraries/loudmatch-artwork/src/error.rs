use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while writing artwork
#[derive(Debug, Error)]
pub enum ArtworkError {
    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// File is neither FLAC nor MP3
    #[error("Unsupported tag container: {0}")]
    UnsupportedContainer(PathBuf),

    /// The embedded cover did not read back intact
    #[error("Cover art did not read back from {0}")]
    CoverMismatch(PathBuf),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Lofty error
    #[error("Metadata error: {0}")]
    Lofty(#[from] lofty::error::LoftyError),
}

/// Result type for artwork operations
pub type Result<T> = std::result::Result<T, ArtworkError>;

impl From<ArtworkError> for loudmatch_core::LoudmatchError {
    fn from(err: ArtworkError) -> Self {
        loudmatch_core::LoudmatchError::artwork(err.to_string())
    }
}
