//! Loudmatch Artwork - front-cover art handling
//!
//! Reads and writes the embedded front cover (picture type 3) of FLAC
//! (`METADATA_BLOCK_PICTURE`) and MP3 (ID3v2 `APIC`) files through lofty, and
//! copies it from one file to another.
//!
//! Probing is forgiving: a file that lofty cannot parse is treated as "not a
//! recognized container", never as an error.
//!
//! # Example
//!
//! ```no_run
//! use loudmatch_artwork::{copy_cover, CoverCopy};
//! use std::path::Path;
//!
//! match copy_cover(Path::new("album/track.mp3"), Path::new("album/track - GAINED.flac")) {
//!     Ok(CoverCopy::Copied { bytes }) => println!("Copied {} bytes of artwork", bytes),
//!     Ok(outcome) => println!("Nothing copied: {:?}", outcome),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

mod copy;
mod error;
mod probe;
mod types;

pub use copy::{copy_cover, copy_cover_in, CoverCopy};
pub use error::{ArtworkError, Result};
pub use probe::{embed_front_cover, has_front_cover, probe_container, read_front_cover};
pub use types::{CoverArt, TagContainer};
