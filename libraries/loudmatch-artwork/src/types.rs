use lofty::{MimeType, Picture, PictureType};

/// Tag containers that can carry a copyable front cover
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagContainer {
    /// FLAC with Vorbis comments and PICTURE blocks
    Flac,
    /// MPEG audio (MP3) with an ID3v2 tag
    Mpeg,
}

/// Front-cover image extracted from an audio file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverArt {
    /// Raw image bytes
    pub data: Vec<u8>,
    /// MIME type (e.g., "image/jpeg", "image/png"), if the tag records one
    pub mime_type: Option<String>,
    /// Picture description
    pub description: Option<String>,
}

impl CoverArt {
    /// Create new cover art
    pub fn new(data: Vec<u8>, mime_type: Option<String>) -> Self {
        Self {
            data,
            mime_type,
            description: None,
        }
    }

    /// Capture a lofty picture
    pub fn from_picture(picture: &Picture) -> Self {
        Self {
            data: picture.data().to_vec(),
            mime_type: picture.mime_type().map(|m| m.as_str().to_string()),
            description: picture.description().map(str::to_string),
        }
    }

    /// Build a front-cover lofty picture
    pub fn to_picture(&self) -> Picture {
        Picture::new_unchecked(
            PictureType::CoverFront,
            self.mime_type.as_deref().map(MimeType::from_str),
            self.description.clone(),
            self.data.clone(),
        )
    }

    /// File extension derived from the MIME subtype ("image/png" -> "png")
    pub fn extension(&self) -> &str {
        self.mime_type
            .as_deref()
            .and_then(|m| m.rsplit('/').next())
            .filter(|ext| !ext.is_empty())
            .unwrap_or("img")
    }
}
