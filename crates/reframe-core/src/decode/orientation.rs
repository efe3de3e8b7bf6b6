//! EXIF orientation metadata.
//!
//! The tag is always read from the original encoded bytes, never from a
//! decoded buffer, since decoding drops the metadata.

use std::io::Cursor;

use exif::{In, Reader, Tag};
use thiserror::Error;

/// Errors raised while reading orientation metadata.
#[derive(Debug, Error)]
pub enum MetadataError {
    /// The container has no EXIF block, or it could not be parsed.
    #[error("EXIF error: {0}")]
    NoExif(String),

    /// EXIF was found but carries no orientation tag.
    #[error("EXIF data has no orientation tag")]
    MissingOrientation,

    /// The orientation tag is not an unsigned integer.
    #[error("EXIF orientation tag is not an integer")]
    InvalidOrientation,
}

/// EXIF orientation values (1-8).
/// See: https://exiftool.org/TagNames/EXIF.html
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Orientation {
    /// Normal (no transformation needed).
    Normal = 1,
    /// Mirrored horizontally.
    FlipHorizontal = 2,
    /// Rotated 180 degrees.
    Rotate180 = 3,
    /// Mirrored vertically.
    FlipVertical = 4,
    /// Mirrored along the top-left/bottom-right diagonal.
    Transpose = 5,
    /// Needs a 90 degree clockwise turn to display upright.
    Rotate90CW = 6,
    /// Mirrored along the top-right/bottom-left diagonal.
    Transverse = 7,
    /// Needs a 90 degree counter-clockwise turn to display upright.
    Rotate270CW = 8,
}

impl Orientation {
    /// Map a raw tag value. Values outside 1-8 have no meaning and yield `None`.
    pub fn from_exif(value: u32) -> Option<Self> {
        match value {
            1 => Some(Orientation::Normal),
            2 => Some(Orientation::FlipHorizontal),
            3 => Some(Orientation::Rotate180),
            4 => Some(Orientation::FlipVertical),
            5 => Some(Orientation::Transpose),
            6 => Some(Orientation::Rotate90CW),
            7 => Some(Orientation::Transverse),
            8 => Some(Orientation::Rotate270CW),
            _ => None,
        }
    }
}

/// Read the raw EXIF orientation tag from encoded image bytes.
///
/// Any container understood by `kamadak-exif` works (JPEG, TIFF, PNG, WebP).
/// The raw value is returned as-is, including values outside 1-8.
///
/// # Errors
///
/// Fails if the bytes carry no parseable EXIF, if the orientation tag is
/// absent, or if its value is not an unsigned integer.
pub fn read_orientation(bytes: &[u8]) -> Result<u32, MetadataError> {
    let mut cursor = Cursor::new(bytes);
    let exif = Reader::new()
        .read_from_container(&mut cursor)
        .map_err(|e| MetadataError::NoExif(e.to_string()))?;

    let field = exif
        .get_field(Tag::Orientation, In::PRIMARY)
        .ok_or(MetadataError::MissingOrientation)?;

    field
        .value
        .get_uint(0)
        .ok_or(MetadataError::InvalidOrientation)
}
