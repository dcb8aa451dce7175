//! Loudness measurement dispatch

use crate::analyzer::LoudnessAnalyzer;
use crate::dbfs::dbfs;
use crate::error::{LoudnessError, Result};
use loudmatch_core::AudioBuffer;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// How loudness is measured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasureMode {
    /// RMS level over all samples, in dBFS
    #[default]
    Dbfs,
    /// EBU R128 integrated loudness, in LUFS
    Lufs,
}

impl MeasureMode {
    /// Unit label printed next to measured values
    pub fn unit(&self) -> &'static str {
        match self {
            MeasureMode::Dbfs => "dBFS",
            MeasureMode::Lufs => "LUFS",
        }
    }
}

impl fmt::Display for MeasureMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MeasureMode::Dbfs => f.write_str("dbfs"),
            MeasureMode::Lufs => f.write_str("lufs"),
        }
    }
}

impl FromStr for MeasureMode {
    type Err = LoudnessError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "dbfs" | "rms" => Ok(MeasureMode::Dbfs),
            "lufs" | "ebur128" | "r128" => Ok(MeasureMode::Lufs),
            other => Err(LoudnessError::UnknownMode(other.to_string())),
        }
    }
}

/// A finite loudness value tagged with how it was measured
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    /// Level in the unit of `mode`
    pub value: f64,
    /// Measurement mode
    pub mode: MeasureMode,
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} {}", self.value, self.mode.unit())
    }
}

/// Measure the loudness of a decoded buffer
///
/// # Errors
/// `NoSamples` for an empty buffer, `SilentAudio` when the level is not
/// finite (digital silence), and analyzer errors in LUFS mode.
pub fn measure(buffer: &AudioBuffer, mode: MeasureMode) -> Result<Measurement> {
    if buffer.is_empty() {
        return Err(LoudnessError::NoSamples);
    }

    let value = match mode {
        MeasureMode::Dbfs => {
            let level = dbfs(buffer);
            if !level.is_finite() {
                return Err(LoudnessError::SilentAudio);
            }
            level
        }
        MeasureMode::Lufs => LoudnessAnalyzer::analyze(buffer)?.integrated_lufs,
    };

    debug!("Measured {} {}", value, mode.unit());
    Ok(Measurement { value, mode })
}

#[cfg(test)]
mod tests {
    use super::*;
    use loudmatch_core::{AudioFormat, SampleRate};

    fn square(amplitude: f32, frames: usize) -> AudioBuffer {
        let samples = (0..frames * 2)
            .map(|i| if (i / 2) % 2 == 0 { amplitude } else { -amplitude })
            .collect();
        AudioBuffer::new(samples, AudioFormat::new(SampleRate::CD_QUALITY, 2, 16))
    }

    #[test]
    fn mode_parsing_and_labels() {
        assert_eq!("DBFS".parse::<MeasureMode>().unwrap(), MeasureMode::Dbfs);
        assert_eq!("lufs".parse::<MeasureMode>().unwrap(), MeasureMode::Lufs);
        assert!("peak".parse::<MeasureMode>().is_err());
        assert_eq!(MeasureMode::default(), MeasureMode::Dbfs);
        assert_eq!(MeasureMode::Lufs.unit(), "LUFS");
        assert_eq!(MeasureMode::Lufs.to_string(), "lufs");
    }

    #[test]
    fn dbfs_mode_matches_rms_level() {
        let m = measure(&square(0.5, 1000), MeasureMode::Dbfs).unwrap();
        assert!((m.value - 20.0 * 0.5_f64.log10()).abs() < 1e-9);
        assert_eq!(m.mode, MeasureMode::Dbfs);
    }

    #[test]
    fn silence_is_an_error_in_both_modes() {
        let silent = square(0.0, 44_100);
        assert!(matches!(
            measure(&silent, MeasureMode::Dbfs),
            Err(LoudnessError::SilentAudio)
        ));
        assert!(matches!(
            measure(&silent, MeasureMode::Lufs),
            Err(LoudnessError::SilentAudio)
        ));
    }

    #[test]
    fn empty_buffer_is_an_error() {
        let empty = AudioBuffer::new(Vec::new(), AudioFormat::cd_quality());
        assert!(matches!(
            measure(&empty, MeasureMode::Dbfs),
            Err(LoudnessError::NoSamples)
        ));
    }
}
