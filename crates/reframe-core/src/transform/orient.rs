//! Resolution of the auto-orientation sentinel.
//!
//! When `rotate` is `Rotation::Auto`, the EXIF orientation tag of the
//! original bytes decides the rotation and flips. A failure to read the tag
//! is returned to the caller and aborts the transform; there is no fallback
//! to "no rotation".

use tracing::debug;

use crate::decode::{read_orientation, MetadataError, Orientation};
use crate::options::{Options, Rotation};

impl Orientation {
    /// Rotation (counter-clockwise), horizontal flip and vertical flip that
    /// display an image with this orientation upright.
    pub fn to_overrides(self) -> (Rotation, bool, bool) {
        match self {
            Orientation::Normal => (Rotation::None, false, false),
            Orientation::FlipHorizontal => (Rotation::None, true, false),
            Orientation::Rotate180 => (Rotation::Rotate180, false, false),
            Orientation::FlipVertical => (Rotation::None, false, true),
            Orientation::Transpose => (Rotation::Rotate270, false, true),
            Orientation::Rotate90CW => (Rotation::Rotate270, false, false),
            Orientation::Transverse => (Rotation::Rotate90, false, true),
            Orientation::Rotate270CW => (Rotation::Rotate90, false, false),
        }
    }
}

/// Overwrite rotate and flips in `options` from a raw orientation tag.
///
/// Tags outside 1-8 leave `options` untouched, including an unresolved
/// `Rotation::Auto`.
pub fn apply_orientation_tag(mut options: Options, tag: u32) -> Options {
    if let Some(orientation) = Orientation::from_exif(tag) {
        let (rotate, flip_horizontal, flip_vertical) = orientation.to_overrides();
        options.rotate = rotate;
        options.flip_horizontal = flip_horizontal;
        options.flip_vertical = flip_vertical;
    }
    options
}

/// Resolve `Rotation::Auto` against the EXIF data in `bytes`.
///
/// Options with any other rotation are returned unchanged without touching
/// the bytes.
///
/// # Errors
///
/// Returns the `MetadataError` from reading the tag when auto-orientation is
/// requested and the tag cannot be read.
pub fn resolve_orientation(bytes: &[u8], options: Options) -> Result<Options, MetadataError> {
    if options.rotate != Rotation::Auto {
        return Ok(options);
    }

    let tag = read_orientation(bytes)?;
    let resolved = apply_orientation_tag(options, tag);
    debug!(
        tag,
        rotate = resolved.rotate.degrees(),
        flip_horizontal = resolved.flip_horizontal,
        flip_vertical = resolved.flip_vertical,
        "resolved EXIF orientation"
    );
    Ok(resolved)
}
