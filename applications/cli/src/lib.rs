//! Loudmatch command-line tools
//!
//! - `volume-matcher <reference> <target>` writes `<target> - GAINED.flac`
//!   at the reference's loudness and carries the cover art over
//! - `volume-diff <dir1> <dir2>` prints the gain ratio of every same-named
//!   pair and the average ratio

pub mod commands;
pub mod config;
pub mod error;
pub mod logging;

pub use config::AppConfig;
pub use error::{CliError, Result};
