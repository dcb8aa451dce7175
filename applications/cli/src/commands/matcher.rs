//! `volume-matcher`: gain a target file to a reference file's loudness

use super::{default_decoder, load_and_measure};
use crate::config::AppConfig;
use crate::error::Result;
use loudmatch_artwork::{copy_cover, CoverCopy};
use loudmatch_audio::{export, ops, OutputFormat};
use loudmatch_loudness::{Gain, MeasureMode, Measurement};
use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, warn};

/// Everything one matching run needs
#[derive(Debug, Clone)]
pub struct MatchOptions {
    pub mode: MeasureMode,
    pub format: OutputFormat,
    pub bits_per_sample: Option<u16>,
    pub suffix: String,
    /// Explicit output path; derived from the target when unset
    pub output: Option<PathBuf>,
    pub copy_cover: bool,
    pub fade_out: Duration,
    pub tail_silence: Duration,
}

impl MatchOptions {
    /// Options taken from the loaded configuration
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            mode: config.loudness.mode,
            format: config.matcher.output_format,
            bits_per_sample: config.matcher.bits_per_sample,
            suffix: config.matcher.output_suffix.clone(),
            output: None,
            copy_cover: config.matcher.copy_cover,
            fade_out: Duration::from_millis(config.matcher.fade_out_ms),
            tail_silence: Duration::from_millis(config.matcher.tail_silence_ms),
        }
    }
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}

/// Result of a matching run
#[derive(Debug, Clone)]
pub struct MatchOutcome {
    pub reference: Measurement,
    pub target: Measurement,
    pub gain: Gain,
    pub output: PathBuf,
    /// `None` when cover copying is disabled or failed
    pub cover: Option<CoverCopy>,
}

/// `<target><suffix>.<ext>`, keeping the target's own extension in the name
///
/// `song.mp3` becomes `song.mp3 - GAINED.flac` with the default suffix.
pub fn output_path(target: &Path, suffix: &str, format: OutputFormat) -> PathBuf {
    let mut name = OsString::from(target.as_os_str());
    name.push(suffix);
    name.push(".");
    name.push(format.extension());
    PathBuf::from(name)
}

/// The level line, e.g. `dBFS: -23.1 -> -18.0`
pub fn level_line(target: &Measurement, reference: &Measurement) -> String {
    format!(
        "{}: {:?} -> {:?}",
        reference.mode.unit(),
        target.value,
        reference.value
    )
}

/// Match the loudness of `target` to `reference` and export the result
///
/// The level line is written to `out` once both files are measured. Cover
/// copy failures are logged and do not fail the run.
pub fn run(
    reference: &Path,
    target: &Path,
    options: &MatchOptions,
    out: &mut dyn Write,
) -> Result<MatchOutcome> {
    let mut decoder = default_decoder();

    let (_, reference_level) = load_and_measure(&mut decoder, reference, options.mode)?;
    let (mut buffer, target_level) = load_and_measure(&mut decoder, target, options.mode)?;

    writeln!(out, "{}", level_line(&target_level, &reference_level))?;

    let gain = Gain::between(reference_level.value, target_level.value)?;
    info!("Applying {} to {:?}", gain, target);
    ops::apply_gain(&mut buffer, gain.linear());

    if !options.fade_out.is_zero() {
        ops::fade_out(&mut buffer, options.fade_out);
    }
    if !options.tail_silence.is_zero() {
        ops::append_silence(&mut buffer, options.tail_silence);
    }

    let output = options
        .output
        .clone()
        .unwrap_or_else(|| output_path(target, &options.suffix, options.format));
    let encoder = options.format.encoder(options.bits_per_sample);
    export(encoder.as_ref(), &buffer, &output)?;

    let cover = if options.copy_cover {
        match copy_cover(target, &output) {
            Ok(outcome) => {
                info!("Cover art for {:?}: {:?}", output, outcome);
                Some(outcome)
            }
            Err(e) => {
                warn!("Could not copy cover art to {:?}: {}", output, e);
                None
            }
        }
    } else {
        None
    };

    Ok(MatchOutcome {
        reference: reference_level,
        target: target_level,
        gain,
        output,
        cover,
    })
}
