//! Loudmatch Core
//!
//! Shared types, traits, and error handling for the Loudmatch tools.
//!
//! The core crate defines:
//! - **Audio Types**: `AudioBuffer`, `AudioFormat`, `SampleRate`
//! - **Core Traits**: `AudioDecoder`, `AudioEncoder`
//! - **Error Handling**: Unified `LoudmatchError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use loudmatch_core::{AudioBuffer, AudioFormat, SampleRate};
//!
//! let format = AudioFormat::new(SampleRate::CD_QUALITY, 2, 16);
//! let buffer = AudioBuffer::new(vec![0.0; 44_100 * 2], format);
//!
//! assert_eq!(buffer.frames(), 44_100);
//! assert!((buffer.duration_secs() - 1.0).abs() < 1e-9);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod traits;
pub mod types;

pub use error::{LoudmatchError, Result};
pub use traits::{AudioDecoder, AudioEncoder};
pub use types::{AudioBuffer, AudioFormat, SampleRate};
