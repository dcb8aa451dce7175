/// Audio decoder implementation using Symphonia
use crate::error::{AudioError, Result};
use loudmatch_core::{AudioBuffer, AudioDecoder as AudioDecoderTrait, AudioFormat, SampleRate};
use std::path::Path;
use symphonia::core::audio::{AudioBufferRef, Signal};
use symphonia::core::codecs::{DecoderOptions, CODEC_TYPE_NULL};
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;
use tracing::{debug, warn};

/// Bit depth assumed when the codec does not report one (lossy formats)
const DEFAULT_BITS_PER_SAMPLE: u16 = 16;

/// Audio decoder using Symphonia
///
/// Supports: MP3, FLAC, OGG/Vorbis, WAV, AAC/M4A
///
/// The whole file is decoded into memory. Channel layout is preserved, so a
/// stereo file yields interleaved `[L, R, L, R, ...]` samples and a 5.1 file
/// yields six samples per frame.
pub struct SymphoniaDecoder;

impl SymphoniaDecoder {
    /// Create a new decoder
    pub fn new() -> Self {
        Self
    }

    /// Decode a whole file into an interleaved f32 buffer
    pub fn decode_file(path: &Path) -> Result<AudioBuffer> {
        if !path.exists() {
            return Err(AudioError::FileNotFound(path.display().to_string()));
        }

        let file = std::fs::File::open(path)?;
        let mss = MediaSourceStream::new(Box::new(file), Default::default());

        // The extension is only a hint; the probe still sniffs the content
        let mut hint = Hint::new();
        if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
            hint.with_extension(ext);
        }

        let probed = symphonia::default::get_probe()
            .format(
                &hint,
                mss,
                &FormatOptions::default(),
                &MetadataOptions::default(),
            )
            .map_err(|e| AudioError::Symphonia(format!("Failed to probe file: {}", e)))?;

        let mut format = probed.format;

        let track = format
            .tracks()
            .iter()
            .find(|t| t.codec_params.codec != CODEC_TYPE_NULL)
            .ok_or_else(|| AudioError::DecodeError("No audio tracks found".to_string()))?;

        let track_id = track.id;
        let sample_rate = track
            .codec_params
            .sample_rate
            .ok_or_else(|| AudioError::DecodeError("Unknown sample rate".to_string()))?;
        let bits_per_sample = track
            .codec_params
            .bits_per_sample
            .and_then(|b| u16::try_from(b).ok())
            .unwrap_or(DEFAULT_BITS_PER_SAMPLE);
        let mut channels = track
            .codec_params
            .channels
            .map(|c| c.count() as u16)
            .unwrap_or(0);

        let mut decoder = symphonia::default::get_codecs()
            .make(&track.codec_params, &DecoderOptions::default())
            .map_err(|e| AudioError::Symphonia(format!("Failed to create decoder: {}", e)))?;

        let mut samples = Vec::new();

        loop {
            let packet = match format.next_packet() {
                Ok(packet) => packet,
                Err(SymphoniaError::IoError(e))
                    if e.kind() == std::io::ErrorKind::UnexpectedEof =>
                {
                    break;
                }
                Err(SymphoniaError::ResetRequired) => {
                    warn!("Track list changed mid-stream in {:?}, stopping", path);
                    break;
                }
                Err(e) => {
                    return Err(AudioError::Symphonia(format!(
                        "Error reading packet: {}",
                        e
                    )));
                }
            };

            if packet.track_id() != track_id {
                continue;
            }

            let decoded = match decoder.decode(&packet) {
                Ok(decoded) => decoded,
                Err(SymphoniaError::DecodeError(e)) => {
                    warn!("Skipping corrupt packet in {:?}: {}", path, e);
                    continue;
                }
                Err(e) => return Err(AudioError::DecodeError(e.to_string())),
            };

            channels = decoded.spec().channels.count() as u16;
            Self::append_interleaved(decoded, &mut samples);
        }

        if samples.is_empty() || channels == 0 {
            return Err(AudioError::DecodeError(format!(
                "No audio decoded from {}",
                path.display()
            )));
        }

        debug!(
            "Decoded {:?}: {} Hz, {} ch, {} bit, {} samples",
            path,
            sample_rate,
            channels,
            bits_per_sample,
            samples.len()
        );

        let format = AudioFormat::new(SampleRate::new(sample_rate), channels, bits_per_sample);
        Ok(AudioBuffer::new(samples, format))
    }

    /// Convert a Symphonia buffer to interleaved f32 and append it to `out`
    ///
    /// Signed integers use symmetric scaling (divide by 2^(N-1)), unsigned
    /// integers are re-centered around their midpoint first.
    fn append_interleaved(decoded: AudioBufferRef, out: &mut Vec<f32>) {
        match decoded {
            AudioBufferRef::F32(buf) => Self::interleave(&buf, out, |s| s.clamp(-1.0, 1.0)),
            AudioBufferRef::F64(buf) => {
                Self::interleave(&buf, out, |s| (s as f32).clamp(-1.0, 1.0));
            }
            AudioBufferRef::S32(buf) => Self::interleave(&buf, out, |s| s as f32 / 2147483648.0),
            AudioBufferRef::S24(buf) => {
                Self::interleave(&buf, out, |s| s.inner() as f32 / 8388608.0);
            }
            AudioBufferRef::S16(buf) => Self::interleave(&buf, out, |s| s as f32 / 32768.0),
            AudioBufferRef::S8(buf) => Self::interleave(&buf, out, |s| s as f32 / 128.0),
            AudioBufferRef::U32(buf) => {
                Self::interleave(&buf, out, |s| {
                    (s as f64 - 2147483648.0) as f32 / 2147483648.0
                });
            }
            AudioBufferRef::U24(buf) => {
                Self::interleave(&buf, out, |s| {
                    (s.inner() as f32 - 8388608.0) / 8388608.0
                });
            }
            AudioBufferRef::U16(buf) => {
                Self::interleave(&buf, out, |s| (s as f32 - 32768.0) / 32768.0);
            }
            AudioBufferRef::U8(buf) => Self::interleave(&buf, out, |s| (s as f32 - 128.0) / 128.0),
        }
    }

    fn interleave<T, F>(
        buf: &symphonia::core::audio::AudioBuffer<T>,
        out: &mut Vec<f32>,
        normalize: F,
    ) where
        T: symphonia::core::sample::Sample + Copy,
        F: Fn(T) -> f32,
    {
        let channels = buf.spec().channels.count();
        let frames = buf.frames();
        let planes: Vec<&[T]> = (0..channels).map(|ch| buf.chan(ch)).collect();

        out.reserve(frames * channels);
        for frame in 0..frames {
            for plane in &planes {
                out.push(normalize(plane[frame]));
            }
        }
    }
}

impl Default for SymphoniaDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioDecoderTrait for SymphoniaDecoder {
    fn decode(&mut self, path: &Path) -> loudmatch_core::Result<AudioBuffer> {
        Ok(Self::decode_file(path)?)
    }
}
