//! Domain types shared across Loudmatch crates

mod audio;

pub use audio::{AudioBuffer, AudioFormat, SampleRate};
