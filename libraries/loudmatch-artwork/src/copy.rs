use crate::error::{ArtworkError, Result};
use crate::probe::{embed_front_cover, probe_container, read_front_cover};
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

/// What a cover copy did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoverCopy {
    /// The front cover was written to the destination
    Copied {
        /// Size of the copied image
        bytes: usize,
    },
    /// The destination already had a front cover and was left alone
    DestinationHasCover,
    /// The source has no usable front cover (or is not FLAC/MP3)
    NoSourceCover,
    /// The destination is not FLAC/MP3
    UnsupportedDestination,
}

/// Copy the front cover from `src` to `dst`, staging it in the system temp dir
pub fn copy_cover(src: &Path, dst: &Path) -> Result<CoverCopy> {
    copy_cover_in(src, dst, &std::env::temp_dir())
}

/// Copy the front cover from `src` to `dst`, staging it in `staging_dir`
///
/// The staged image is named after the destination file and the image type
/// and is removed when this function returns, on every path. The cover is
/// read back from `dst` after writing, and a missing or altered cover is an
/// error.
pub fn copy_cover_in(src: &Path, dst: &Path, staging_dir: &Path) -> Result<CoverCopy> {
    if probe_container(dst).is_none() {
        debug!("Destination {:?} is not FLAC/MP3, skipping cover", dst);
        return Ok(CoverCopy::UnsupportedDestination);
    }

    if read_front_cover(dst).is_some() {
        debug!("Destination {:?} already has a front cover", dst);
        return Ok(CoverCopy::DestinationHasCover);
    }

    let Some(mut art) = read_front_cover(src) else {
        debug!("Source {:?} has no usable front cover", src);
        return Ok(CoverCopy::NoSourceCover);
    };

    let dst_name = dst
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "cover".to_string());
    let mut staged = tempfile::Builder::new()
        .prefix(&format!("{}.", dst_name))
        .suffix(&format!(".{}", art.extension()))
        .tempfile_in(staging_dir)?;

    staged.write_all(&art.data)?;
    staged.flush()?;
    art.data = std::fs::read(staged.path())?;

    embed_front_cover(dst, &art)?;

    let written = read_front_cover(dst);
    if written.as_ref().map(|w| &w.data) != Some(&art.data) {
        return Err(ArtworkError::CoverMismatch(dst.to_path_buf()));
    }

    let bytes = art.data.len();
    info!("Copied {} byte front cover from {:?} to {:?}", bytes, src, dst);
    Ok(CoverCopy::Copied { bytes })
}
