//! RMS level relative to full scale

use loudmatch_core::AudioBuffer;

/// Root mean square over all interleaved samples
///
/// Returns 0.0 for an empty buffer.
pub fn rms(buffer: &AudioBuffer) -> f64 {
    if buffer.is_empty() {
        return 0.0;
    }
    let sum_sq: f64 = buffer
        .samples
        .iter()
        .map(|&s| {
            let s = f64::from(s);
            s * s
        })
        .sum();
    (sum_sq / buffer.len() as f64).sqrt()
}

/// Loudness in dBFS: `20 * log10(rms)` with full scale at 1.0
///
/// Digital silence and empty buffers yield negative infinity.
pub fn dbfs(buffer: &AudioBuffer) -> f64 {
    let rms = rms(buffer);
    if rms == 0.0 {
        return f64::NEG_INFINITY;
    }
    20.0 * rms.log10()
}

#[cfg(test)]
mod tests {
    use super::*;
    use loudmatch_core::{AudioFormat, SampleRate};

    fn mono(samples: Vec<f32>) -> AudioBuffer {
        AudioBuffer::new(samples, AudioFormat::new(SampleRate::CD_QUALITY, 1, 16))
    }

    #[test]
    fn full_scale_square_is_zero_dbfs() {
        let buffer = mono(vec![1.0, -1.0, 1.0, -1.0]);
        assert!((dbfs(&buffer) - 0.0).abs() < 1e-12);
    }

    #[test]
    fn half_scale_square_is_minus_six() {
        let buffer = mono(vec![0.5, -0.5, 0.5, -0.5]);
        let expected = 20.0 * 0.5_f64.log10();
        assert!((dbfs(&buffer) - expected).abs() < 1e-9);
    }

    #[test]
    fn sine_rms_is_amplitude_over_root_two() {
        let samples: Vec<f32> = (0..44_100)
            .map(|i| 0.1 * (2.0 * std::f32::consts::PI * 1000.0 * i as f32 / 44_100.0).sin())
            .collect();
        let buffer = mono(samples);
        let expected = 0.1 / 2.0_f64.sqrt();
        assert!((rms(&buffer) - expected).abs() < 1e-4);
    }

    #[test]
    fn silence_is_negative_infinity() {
        assert_eq!(dbfs(&mono(vec![0.0; 100])), f64::NEG_INFINITY);
        assert_eq!(dbfs(&mono(Vec::new())), f64::NEG_INFINITY);
    }
}
