/// CLI error types
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("no audio files in {}", .0.display())]
    NoFiles(PathBuf),

    #[error("No counterpart for {name} in {}", .dir.display())]
    MissingPair { name: String, dir: PathBuf },

    #[error(transparent)]
    Core(#[from] loudmatch_core::LoudmatchError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<loudmatch_audio::AudioError> for CliError {
    fn from(err: loudmatch_audio::AudioError) -> Self {
        CliError::Core(err.into())
    }
}

impl From<loudmatch_loudness::LoudnessError> for CliError {
    fn from(err: loudmatch_loudness::LoudnessError) -> Self {
        CliError::Core(err.into())
    }
}

impl From<config::ConfigError> for CliError {
    fn from(err: config::ConfigError) -> Self {
        CliError::Config(err.to_string())
    }
}
