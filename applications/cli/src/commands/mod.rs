//! Command implementations behind the binaries

pub mod diff;
pub mod matcher;

use crate::error::Result;
use loudmatch_audio::SymphoniaDecoder;
use loudmatch_core::{AudioBuffer, AudioDecoder};
use loudmatch_loudness::{measure, MeasureMode, Measurement};
use std::path::Path;
use tracing::debug;

/// Decode a file and measure its loudness
pub(crate) fn load_and_measure(
    decoder: &mut dyn AudioDecoder,
    path: &Path,
    mode: MeasureMode,
) -> Result<(AudioBuffer, Measurement)> {
    let buffer = decoder.decode(path)?;
    let level = measure(&buffer, mode)?;
    debug!("{:?}: {}", path, level);
    Ok((buffer, level))
}

/// Decoder used by both commands
pub(crate) fn default_decoder() -> SymphoniaDecoder {
    SymphoniaDecoder::new()
}
