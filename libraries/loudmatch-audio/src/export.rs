//! Export with an incomplete-write marker
//!
//! While an export is running, `<output>-INCOMPLETE` sits next to the output.
//! The marker is removed only after the encoder returns successfully, so a
//! leftover marker flags a truncated file.

use loudmatch_core::{AudioBuffer, AudioEncoder, Result};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Suffix appended to the output file name while it is being written
pub const INCOMPLETE_SUFFIX: &str = "-INCOMPLETE";

/// Path of the marker file for `path`
pub fn incomplete_marker(path: &Path) -> PathBuf {
    let mut name: OsString = path.as_os_str().to_os_string();
    name.push(INCOMPLETE_SUFFIX);
    PathBuf::from(name)
}

/// Encode `buffer` to `path`, guarding the write with a marker file
pub fn export(encoder: &dyn AudioEncoder, buffer: &AudioBuffer, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let marker = incomplete_marker(path);
    fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&marker)?;
    debug!("Created marker {:?}", marker);

    encoder.encode(buffer, path)?;

    fs::remove_file(&marker)?;
    info!(
        "Exported {:.1}s of {} audio to {:?}",
        buffer.duration_secs(),
        encoder.extension(),
        path
    );

    Ok(())
}
