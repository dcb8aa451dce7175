use crate::error::{ArtworkError, Result};
use crate::types::{CoverArt, TagContainer};
use lofty::{FileType, PictureType, Probe, TagExt, TaggedFile, TaggedFileExt};
use std::path::Path;
use tracing::debug;

/// Read and parse a file, treating every failure as "not a tagged file"
fn read_tagged(path: &Path) -> Option<TaggedFile> {
    let probe = match Probe::open(path) {
        Ok(probe) => probe,
        Err(e) => {
            debug!("Cannot open {:?} for tag probing: {}", path, e);
            return None;
        }
    };
    match probe.read() {
        Ok(tagged_file) => Some(tagged_file),
        Err(e) => {
            debug!("{:?} is not a recognized tag container: {}", path, e);
            None
        }
    }
}

fn container_of(tagged_file: &TaggedFile) -> Option<TagContainer> {
    match tagged_file.file_type() {
        FileType::Flac => Some(TagContainer::Flac),
        FileType::Mpeg => Some(TagContainer::Mpeg),
        _ => None,
    }
}

/// Identify a FLAC or MP3 file; anything else (or unreadable) is `None`
pub fn probe_container(path: &Path) -> Option<TagContainer> {
    read_tagged(path).as_ref().and_then(container_of)
}

/// Front cover of a FLAC or MP3 file
///
/// Looks in the primary tag first, then the first available tag. Returns
/// `None` for unrecognized or malformed files and for files without a
/// picture of type `CoverFront`.
pub fn read_front_cover(path: &Path) -> Option<CoverArt> {
    let tagged_file = read_tagged(path)?;
    container_of(&tagged_file)?;

    let tag = tagged_file
        .primary_tag()
        .or_else(|| tagged_file.first_tag())?;

    tag.pictures()
        .iter()
        .find(|p| matches!(p.pic_type(), PictureType::CoverFront))
        .filter(|p| !p.data().is_empty())
        .map(CoverArt::from_picture)
}

/// Whether the file already carries a front cover
pub fn has_front_cover(path: &Path) -> bool {
    read_front_cover(path).is_some()
}

/// Write `art` as the front cover of a FLAC or MP3 file
///
/// Existing front covers are replaced; other pictures and tag items are
/// preserved. The primary tag is created when the file has none.
pub fn embed_front_cover(path: &Path, art: &CoverArt) -> Result<()> {
    if !path.exists() {
        return Err(ArtworkError::FileNotFound(path.to_path_buf()));
    }

    let mut tagged_file = Probe::open(path)?.read()?;
    if container_of(&tagged_file).is_none() {
        return Err(ArtworkError::UnsupportedContainer(path.to_path_buf()));
    }

    let tag_type = tagged_file.primary_tag_type();
    if tagged_file.tag(tag_type).is_none() {
        tagged_file.insert_tag(lofty::Tag::new(tag_type));
    }
    let tag = tagged_file
        .tag_mut(tag_type)
        .ok_or_else(|| ArtworkError::UnsupportedContainer(path.to_path_buf()))?;

    tag.remove_picture_type(PictureType::CoverFront);
    tag.push_picture(art.to_picture());
    tag.save_to_path(path)?;

    debug!("Embedded {} byte front cover into {:?}", art.data.len(), path);
    Ok(())
}
