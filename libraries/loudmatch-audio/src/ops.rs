//! In-place operations on decoded buffers

use loudmatch_core::AudioBuffer;
use std::time::Duration;

/// Attenuation reached at the last frame of a fade-out
const FADE_FLOOR_DB: f64 = -120.0;

fn frames_for(buffer: &AudioBuffer, duration: Duration) -> usize {
    (duration.as_secs_f64() * f64::from(buffer.format.sample_rate.as_hz())).round() as usize
}

/// Multiply every sample by `linear`, saturating at full scale
pub fn apply_gain(buffer: &mut AudioBuffer, linear: f64) {
    for sample in &mut buffer.samples {
        *sample = (f64::from(*sample) * linear).clamp(-1.0, 1.0) as f32;
    }
}

/// Fade the last `duration` of the buffer down to silence
///
/// The gain ramps linearly in dB from 0 to -120 dB. Durations longer than
/// the buffer fade the whole signal.
pub fn fade_out(buffer: &mut AudioBuffer, duration: Duration) {
    let channels = buffer.format.channels as usize;
    let total = buffer.frames();
    let fade_frames = frames_for(buffer, duration).min(total);
    if fade_frames == 0 || channels == 0 {
        return;
    }

    let start = total - fade_frames;
    for i in 0..fade_frames {
        let progress = (i + 1) as f64 / fade_frames as f64;
        let gain = 10.0_f64.powf(FADE_FLOOR_DB * progress / 20.0);
        let offset = (start + i) * channels;
        for sample in &mut buffer.samples[offset..offset + channels] {
            *sample = (f64::from(*sample) * gain) as f32;
        }
    }
}

/// Append `duration` of digital silence
pub fn append_silence(buffer: &mut AudioBuffer, duration: Duration) {
    let frames = frames_for(buffer, duration);
    let new_len = buffer.samples.len() + frames * buffer.format.channels as usize;
    buffer.samples.resize(new_len, 0.0);
}
