/// Audio-related types

/// Sample rate in Hz
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SampleRate(pub u32);

impl SampleRate {
    /// CD quality (44.1 kHz)
    pub const CD_QUALITY: Self = Self(44_100);
    /// DVD quality (48 kHz)
    pub const DVD_QUALITY: Self = Self(48_000);

    /// Create a new sample rate
    #[must_use]
    pub fn new(hz: u32) -> Self {
        Self(hz)
    }

    /// Get the sample rate as Hz
    pub fn as_hz(&self) -> u32 {
        self.0
    }
}

/// Audio format information
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AudioFormat {
    /// Sample rate
    pub sample_rate: SampleRate,

    /// Number of channels (1 = mono, 2 = stereo, etc.)
    pub channels: u16,

    /// Bits per sample of the source material, used when re-encoding
    pub bits_per_sample: u16,
}

impl AudioFormat {
    /// Create a new audio format
    pub fn new(sample_rate: SampleRate, channels: u16, bits_per_sample: u16) -> Self {
        Self {
            sample_rate,
            channels,
            bits_per_sample,
        }
    }

    /// Create CD quality stereo format (44.1kHz, 16-bit, stereo)
    pub fn cd_quality() -> Self {
        Self {
            sample_rate: SampleRate::CD_QUALITY,
            channels: 2,
            bits_per_sample: 16,
        }
    }
}

/// Audio buffer containing decoded samples
///
/// Samples are stored as f32 in the range [-1.0, 1.0]
/// Interleaved format: [L, R, L, R, ...] for stereo
#[derive(Debug, Clone, PartialEq)]
pub struct AudioBuffer {
    /// Audio samples (f32, interleaved)
    pub samples: Vec<f32>,

    /// Audio format information
    pub format: AudioFormat,
}

impl AudioBuffer {
    /// Create a new audio buffer
    pub fn new(samples: Vec<f32>, format: AudioFormat) -> Self {
        Self { samples, format }
    }

    /// Get the number of frames (samples per channel)
    pub fn frames(&self) -> usize {
        match self.format.channels {
            0 => 0,
            channels => self.samples.len() / channels as usize,
        }
    }

    /// Get the duration in seconds
    pub fn duration_secs(&self) -> f64 {
        if self.format.sample_rate.as_hz() == 0 {
            return 0.0;
        }
        self.frames() as f64 / self.format.sample_rate.as_hz() as f64
    }

    /// Check if the buffer is empty
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Get the length in samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_rate_common_values() {
        assert_eq!(SampleRate::CD_QUALITY.as_hz(), 44_100);
        assert_eq!(SampleRate::DVD_QUALITY.as_hz(), 48_000);
        assert_eq!(SampleRate::new(96_000).as_hz(), 96_000);
    }

    #[test]
    fn buffer_frames_and_duration() {
        let format = AudioFormat::new(SampleRate::DVD_QUALITY, 2, 24);
        let buffer = AudioBuffer::new(vec![0.0; 48_000], format);

        assert_eq!(buffer.len(), 48_000);
        assert_eq!(buffer.frames(), 24_000);
        assert!((buffer.duration_secs() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn zero_channel_buffer_has_no_frames() {
        let format = AudioFormat::new(SampleRate::CD_QUALITY, 0, 16);
        let buffer = AudioBuffer::new(vec![0.1; 8], format);
        assert_eq!(buffer.frames(), 0);
        assert_eq!(buffer.duration_secs(), 0.0);
    }

    #[test]
    fn empty_buffer() {
        let buffer = AudioBuffer::new(Vec::new(), AudioFormat::cd_quality());
        assert!(buffer.is_empty());
        assert_eq!(buffer.frames(), 0);
    }
}
