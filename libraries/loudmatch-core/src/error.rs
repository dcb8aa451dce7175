/// Core error types for Loudmatch
use thiserror::Error;

/// Result type alias using `LoudmatchError`
pub type Result<T> = std::result::Result<T, LoudmatchError>;

/// Core error type for Loudmatch
#[derive(Error, Debug)]
pub enum LoudmatchError {
    /// Audio decoding/encoding errors
    #[error("Audio error: {0}")]
    Audio(String),

    /// Loudness measurement errors
    #[error("Loudness error: {0}")]
    Loudness(String),

    /// Cover art errors
    #[error("Artwork error: {0}")]
    Artwork(String),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl LoudmatchError {
    /// Create an audio error
    pub fn audio(msg: impl Into<String>) -> Self {
        Self::Audio(msg.into())
    }

    /// Create a loudness error
    pub fn loudness(msg: impl Into<String>) -> Self {
        Self::Loudness(msg.into())
    }

    /// Create an artwork error
    pub fn artwork(msg: impl Into<String>) -> Self {
        Self::Artwork(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_format_messages() {
        assert_eq!(
            LoudmatchError::audio("bad packet").to_string(),
            "Audio error: bad packet"
        );
        assert_eq!(
            LoudmatchError::artwork("no picture block").to_string(),
            "Artwork error: no picture block"
        );
    }

    #[test]
    fn io_errors_are_transparent() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.flac");
        let err: LoudmatchError = io.into();
        assert_eq!(err.to_string(), "missing.flac");
    }
}
