//! Loudmatch Audio
//!
//! Audio decoding, sample-level gain processing, and lossless export.
//!
//! This crate provides:
//! - Audio decoding via Symphonia (MP3, FLAC, OGG, WAV, AAC)
//! - Gain, fade-out, and tail-silence operations on decoded buffers
//! - FLAC (flacenc) and WAV (hound) encoders
//! - Export guarded by an `-INCOMPLETE` marker file
//!
//! # Example
//!
//! ```rust,no_run
//! use loudmatch_audio::{export, ops, OutputFormat, SymphoniaDecoder};
//! use loudmatch_core::AudioDecoder;
//! use std::path::Path;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut decoder = SymphoniaDecoder::new();
//! let mut buffer = decoder.decode(Path::new("/music/song.mp3"))?;
//!
//! ops::apply_gain(&mut buffer, 0.5);
//!
//! let encoder = OutputFormat::Flac.encoder(None);
//! export(encoder.as_ref(), &buffer, Path::new("/music/song - GAINED.flac"))?;
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]

mod decoder;
mod encoder;
mod error;
mod export;
pub mod ops;

pub use decoder::SymphoniaDecoder;
pub use encoder::{quantize, FlacEncoder, OutputFormat, WavEncoder};
pub use error::{AudioError, Result};
pub use export::{export, incomplete_marker, INCOMPLETE_SUFFIX};
