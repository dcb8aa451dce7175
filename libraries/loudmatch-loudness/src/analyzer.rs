//! EBU R128 loudness analysis
//!
//! Integrated loudness per ITU-R BS.1770 using the ebur128 crate, offered as
//! an alternative to plain RMS dBFS when perceived loudness matters more
//! than signal energy.

use crate::error::{LoudnessError, Result};
use ebur128::{EbuR128, Mode};
use loudmatch_core::AudioBuffer;

/// Loudness characteristics of an analyzed buffer
#[derive(Debug, Clone, PartialEq)]
pub struct LoudnessInfo {
    /// Integrated loudness in LUFS
    pub integrated_lufs: f64,

    /// Sample peak in dBFS (not accounting for inter-sample peaks)
    pub sample_peak_dbfs: f64,

    /// Duration of the analyzed audio in seconds
    pub duration_seconds: f64,

    /// Sample rate of the analyzed audio
    pub sample_rate: u32,

    /// Number of channels
    pub channels: u32,
}

/// EBU R128 loudness analyzer
///
/// # Example
///
/// ```ignore
/// let mut analyzer = LoudnessAnalyzer::new(44100, 2)?;
/// analyzer.add_frames(&audio_samples)?;
/// let info = analyzer.finalize()?;
/// println!("Integrated loudness: {:.1} LUFS", info.integrated_lufs);
/// ```
pub struct LoudnessAnalyzer {
    ebur128: EbuR128,
    sample_rate: u32,
    channels: u32,
    samples_processed: usize,
}

impl LoudnessAnalyzer {
    /// Create a new loudness analyzer
    ///
    /// # Arguments
    /// * `sample_rate` - Sample rate in Hz (8000-384000)
    /// * `channels` - Number of channels (1-8)
    pub fn new(sample_rate: u32, channels: u32) -> Result<Self> {
        if !(8000..=384_000).contains(&sample_rate) {
            return Err(LoudnessError::InvalidSampleRate(sample_rate));
        }
        if !(1..=8).contains(&channels) {
            return Err(LoudnessError::InvalidChannelCount(channels));
        }

        let ebur128 = EbuR128::new(channels, sample_rate, Mode::I | Mode::SAMPLE_PEAK)?;

        Ok(Self {
            ebur128,
            sample_rate,
            channels,
            samples_processed: 0,
        })
    }

    /// Analyze a whole decoded buffer
    pub fn analyze(buffer: &AudioBuffer) -> Result<LoudnessInfo> {
        let mut analyzer = Self::new(
            buffer.format.sample_rate.as_hz(),
            u32::from(buffer.format.channels),
        )?;
        analyzer.add_frames(&buffer.samples)?;
        analyzer.finalize()
    }

    /// Add interleaved f32 frames for analysis
    ///
    /// Length must be divisible by the channel count.
    pub fn add_frames(&mut self, samples: &[f32]) -> Result<()> {
        if samples.is_empty() {
            return Ok(());
        }

        if samples.len() % self.channels as usize != 0 {
            return Err(LoudnessError::AnalysisError(format!(
                "Sample count {} is not divisible by channel count {}",
                samples.len(),
                self.channels
            )));
        }

        self.ebur128.add_frames_f32(samples)?;
        self.samples_processed += samples.len();

        Ok(())
    }

    /// Finalize analysis
    ///
    /// # Errors
    /// Returns error if no samples were provided or the audio is silent
    /// (ebur128 gates everything below -70 LUFS, including clips shorter
    /// than one 400 ms block)
    pub fn finalize(self) -> Result<LoudnessInfo> {
        if self.samples_processed == 0 {
            return Err(LoudnessError::NoSamples);
        }

        let frames = self.samples_processed / self.channels as usize;
        let duration_seconds = frames as f64 / f64::from(self.sample_rate);

        let integrated_lufs = self.ebur128.loudness_global()?;
        if !integrated_lufs.is_finite() {
            return Err(LoudnessError::SilentAudio);
        }

        let sample_peak_linear = (0..self.channels)
            .map(|ch| self.ebur128.sample_peak(ch).unwrap_or(0.0))
            .fold(0.0_f64, f64::max);

        let sample_peak_dbfs = if sample_peak_linear > 0.0 {
            20.0 * sample_peak_linear.log10()
        } else {
            f64::NEG_INFINITY
        };

        Ok(LoudnessInfo {
            integrated_lufs,
            sample_peak_dbfs,
            duration_seconds,
            sample_rate: self.sample_rate,
            channels: self.channels,
        })
    }
}
