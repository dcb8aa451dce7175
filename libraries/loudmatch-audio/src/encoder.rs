//! Lossless encoders
//!
//! Both encoders quantize the f32 buffer back to signed integer PCM at the
//! source bit depth (or an explicit override), so 16-bit material that was not
//! gained round-trips bit-exactly.

use crate::error::{AudioError, Result};
use flacenc::bitsink::{BitSink, ByteSink};
use flacenc::component::{BitRepr, StreamInfo};
use flacenc::constant::MIN_BLOCK_SIZE;
use flacenc::error::Verify;
use flacenc::source::{Fill, FrameBuf};
use loudmatch_core::{AudioBuffer, AudioEncoder};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

/// Quantize a normalized sample to a signed `bits`-wide integer
///
/// Uses the same symmetric 2^(N-1) scale as the decoder and saturates at the
/// integer range.
pub fn quantize(sample: f32, bits: u16) -> i32 {
    let scale = (1_i64 << (bits.clamp(2, 32) - 1)) as f64;
    (f64::from(sample) * scale)
        .round()
        .clamp(-scale, scale - 1.0) as i32
}

/// Container used for the gained output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Flac,
    Wav,
}

impl OutputFormat {
    /// File extension for this container
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Flac => "flac",
            OutputFormat::Wav => "wav",
        }
    }

    /// Build the encoder for this container
    ///
    /// `bits_per_sample` overrides the source bit depth when set.
    pub fn encoder(&self, bits_per_sample: Option<u16>) -> Box<dyn AudioEncoder> {
        match self {
            OutputFormat::Flac => Box::new(FlacEncoder { bits_per_sample }),
            OutputFormat::Wav => Box::new(WavEncoder { bits_per_sample }),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for OutputFormat {
    type Err = AudioError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "flac" => Ok(OutputFormat::Flac),
            "wav" | "wave" => Ok(OutputFormat::Wav),
            other => Err(AudioError::UnsupportedFormat(other.to_string())),
        }
    }
}

fn check_buffer(buffer: &AudioBuffer) -> Result<()> {
    if buffer.is_empty() {
        return Err(AudioError::InvalidBuffer("no samples to encode".to_string()));
    }
    let channels = buffer.format.channels as usize;
    if channels == 0 || buffer.samples.len() % channels != 0 {
        return Err(AudioError::InvalidBuffer(format!(
            "{} samples cannot be split into {} channels",
            buffer.samples.len(),
            channels
        )));
    }
    Ok(())
}

/// FLAC encoder backed by flacenc
#[derive(Debug, Clone, Copy, Default)]
pub struct FlacEncoder {
    /// Output bit depth override
    pub bits_per_sample: Option<u16>,
}

impl FlacEncoder {
    /// Create an encoder that keeps the source bit depth
    pub fn new() -> Self {
        Self::default()
    }

    /// Bit depth actually written: 16 for anything up to 16 bits, 24 above
    pub fn output_bits(&self, buffer: &AudioBuffer) -> u16 {
        let bits = self.bits_per_sample.unwrap_or(buffer.format.bits_per_sample);
        if bits <= 16 {
            16
        } else {
            24
        }
    }

    /// Encode the buffer to FLAC bytes
    ///
    /// The stream uses one fixed block size, and the last frame holds only
    /// the remaining samples, so a decoder returns exactly the encoded
    /// length. STREAMINFO is followed by a PADDING block, which leaves room
    /// for tags written in place later.
    pub fn encode_to_vec(&self, buffer: &AudioBuffer) -> Result<Vec<u8>> {
        check_buffer(buffer)?;

        let bits = self.output_bits(buffer);
        let channels = buffer.format.channels as usize;
        let frames = buffer.frames();
        let pcm: Vec<i32> = buffer.samples.iter().map(|&s| quantize(s, bits)).collect();

        let config = flacenc::config::Encoder::default()
            .into_verified()
            .map_err(|(_, e)| encode_error(e))?;
        let block_size = fixed_block_size(frames, config.block_size).ok_or_else(|| {
            AudioError::EncodeError(format!("{} frames is too short for a FLAC stream", frames))
        })?;

        let mut stream_info = StreamInfo::new(
            buffer.format.sample_rate.as_hz() as usize,
            channels,
            bits as usize,
        )
        .map_err(encode_error)?;

        let mut encoded = Vec::with_capacity(frames.div_ceil(block_size));
        for (frame_number, chunk) in pcm.chunks(block_size * channels).enumerate() {
            let mut framebuf =
                FrameBuf::with_size(channels, chunk.len() / channels).map_err(encode_error)?;
            framebuf.fill_interleaved(chunk).map_err(encode_error)?;
            let frame =
                flacenc::encode_fixed_size_frame(&config, &framebuf, frame_number, &stream_info)
                    .map_err(encode_error)?;
            encoded.push(frame);
        }

        let frame_bytes = encoded.iter().map(|f| f.count_bits() / 8);
        let min_frame = frame_bytes.clone().min().unwrap_or(0);
        let max_frame = frame_bytes.max().unwrap_or(0);
        stream_info
            .set_block_sizes(block_size, block_size)
            .map_err(encode_error)?;
        stream_info
            .set_frame_sizes(min_frame, max_frame)
            .map_err(encode_error)?;
        stream_info.set_total_samples(frames);

        let mut sink = ByteSink::new();
        sink.write_bytes_aligned(b"fLaC")
            .map_err(serialize_error)?;
        write_block_header(&mut sink, BLOCK_STREAMINFO, false, stream_info.count_bits() / 8)
            .map_err(serialize_error)?;
        stream_info.write(&mut sink).map_err(serialize_error)?;
        write_block_header(&mut sink, BLOCK_PADDING, true, PADDING_BYTES)
            .map_err(serialize_error)?;
        sink.write_bytes_aligned(&[0u8; PADDING_BYTES])
            .map_err(serialize_error)?;
        for frame in &encoded {
            frame.write(&mut sink).map_err(serialize_error)?;
        }

        debug!(
            "Encoded {} frames into {} FLAC frames of {}",
            frames,
            encoded.len(),
            block_size
        );
        Ok(sink.as_slice().to_vec())
    }
}

/// FLAC metadata block types
const BLOCK_STREAMINFO: u8 = 0;
const BLOCK_PADDING: u8 = 1;

/// Size of the PADDING block written after STREAMINFO
const PADDING_BYTES: usize = 8192;

fn encode_error(e: impl fmt::Debug) -> AudioError {
    AudioError::EncodeError(format!("{:?}", e))
}

fn serialize_error<E>(_: E) -> AudioError {
    AudioError::EncodeError("failed to serialize FLAC stream".to_string())
}

fn write_block_header(
    sink: &mut ByteSink,
    block_type: u8,
    is_last: bool,
    len: usize,
) -> std::result::Result<(), std::convert::Infallible> {
    let flag = if is_last { 0x80 } else { 0x00 };
    sink.write(flag | block_type)?;
    sink.write_lsbs(len as u32, 24)
}

/// Block size for a fixed-blocksize stream of `frames` frames
///
/// Starts at `preferred` and shrinks until the final partial block is either
/// empty or at least `MIN_BLOCK_SIZE` long. Streams shorter than one block
/// use a single block.
fn fixed_block_size(frames: usize, preferred: usize) -> Option<usize> {
    if frames < MIN_BLOCK_SIZE {
        return None;
    }
    if frames <= preferred {
        return Some(frames);
    }
    (MIN_BLOCK_SIZE..=preferred).rev().find(|&size| {
        let rest = frames % size;
        rest == 0 || rest >= MIN_BLOCK_SIZE
    })
}

impl AudioEncoder for FlacEncoder {
    fn encode(&self, buffer: &AudioBuffer, path: &Path) -> loudmatch_core::Result<()> {
        let bytes = self.encode_to_vec(buffer)?;
        std::fs::write(path, &bytes)?;
        debug!("Wrote {} FLAC bytes to {:?}", bytes.len(), path);
        Ok(())
    }

    fn extension(&self) -> &'static str {
        OutputFormat::Flac.extension()
    }
}

/// WAV encoder backed by hound (integer PCM)
#[derive(Debug, Clone, Copy, Default)]
pub struct WavEncoder {
    /// Output bit depth override
    pub bits_per_sample: Option<u16>,
}

impl WavEncoder {
    /// Create an encoder that keeps the source bit depth
    pub fn new() -> Self {
        Self::default()
    }

    /// Bit depth actually written: 16, 24 or 32
    pub fn output_bits(&self, buffer: &AudioBuffer) -> u16 {
        match self.bits_per_sample.unwrap_or(buffer.format.bits_per_sample) {
            0..=16 => 16,
            17..=24 => 24,
            _ => 32,
        }
    }

    fn write(&self, buffer: &AudioBuffer, path: &Path) -> Result<()> {
        check_buffer(buffer)?;

        let bits = self.output_bits(buffer);
        let spec = hound::WavSpec {
            channels: buffer.format.channels,
            sample_rate: buffer.format.sample_rate.as_hz(),
            bits_per_sample: bits,
            sample_format: hound::SampleFormat::Int,
        };

        let mut writer = hound::WavWriter::create(path, spec)?;
        for &sample in &buffer.samples {
            writer.write_sample(quantize(sample, bits))?;
        }
        writer.finalize()?;

        debug!("Wrote {} WAV samples to {:?}", buffer.len(), path);
        Ok(())
    }
}

impl AudioEncoder for WavEncoder {
    fn encode(&self, buffer: &AudioBuffer, path: &Path) -> loudmatch_core::Result<()> {
        Ok(self.write(buffer, path)?)
    }

    fn extension(&self) -> &'static str {
        OutputFormat::Wav.extension()
    }
}
