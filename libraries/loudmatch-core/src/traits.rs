/// Core traits for Loudmatch
use crate::error::Result;
use crate::types::AudioBuffer;
use std::path::Path;

/// Audio decoder trait
///
/// Implementers decode a whole audio file into an `AudioBuffer`.
pub trait AudioDecoder {
    /// Decode an audio file from the given path (loads entire file)
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or decoded
    fn decode(&mut self, path: &Path) -> Result<AudioBuffer>;
}

/// Audio encoder trait
///
/// Implementers write an `AudioBuffer` to disk in a single container format.
pub trait AudioEncoder {
    /// Encode the buffer and write it to `path`
    ///
    /// # Errors
    /// Returns an error if the samples cannot be encoded or the file cannot be written
    fn encode(&self, buffer: &AudioBuffer, path: &Path) -> Result<()>;

    /// File extension (without the dot) of the produced container
    fn extension(&self) -> &'static str;
}
