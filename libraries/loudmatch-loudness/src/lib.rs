//! Loudness measurement and gain computation for Loudmatch
//!
//! This crate provides:
//! - RMS loudness in dBFS, with full scale at 1.0
//! - EBU R128 integrated loudness (LUFS) as an alternative measure
//! - `Gain` computation between a reference and a target level
//! - `DiffReport` aggregation for pairwise comparisons
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌───────────────┐
//! │ AudioBuffer │ ──► │   measure    │ ──► │  Measurement  │
//! └─────────────┘     └──────────────┘     └───────────────┘
//!                                                 │
//!                            reference, target    ▼
//!                                          ┌──────────────┐
//!                                          │ Gain / Diff  │
//!                                          └──────────────┘
//! ```
//!
//! # Example
//!
//! ```ignore
//! use loudmatch_loudness::{measure, Gain, MeasureMode};
//!
//! let reference = measure(&reference_buffer, MeasureMode::Dbfs)?;
//! let target = measure(&target_buffer, MeasureMode::Dbfs)?;
//!
//! let gain = Gain::between(reference.value, target.value)?;
//! println!("Apply {} to the target", gain);
//! ```

#![deny(unsafe_code)]

mod analyzer;
mod dbfs;
mod error;
mod gain;
mod measure;
mod report;

pub use analyzer::{LoudnessAnalyzer, LoudnessInfo};
pub use dbfs::{dbfs, rms};
pub use error::{LoudnessError, Result};
pub use gain::{db_to_ratio, Gain};
pub use measure::{measure, MeasureMode, Measurement};
pub use report::{DiffEntry, DiffReport};
