//! Caller-supplied transform options.
//!
//! `Options` is handed to the pipeline once per call and is never mutated by
//! it. The only stage that derives a modified copy is the orientation
//! resolver, which replaces the rotate/flip fields when auto-orientation is
//! requested.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rotation requested by the caller, counter-clockwise.
///
/// `Auto` is the sentinel value `360`: the actual rotation is derived from the
/// EXIF orientation tag of the source bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub enum Rotation {
    #[default]
    None,
    Rotate90,
    Rotate180,
    Rotate270,
    Auto,
}

/// Returned when a rotation value other than 0, 90, 180, 270 or 360 is supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("rotation must be one of 0, 90, 180, 270 or 360, got {0}")]
pub struct InvalidRotation(pub u16);

impl Rotation {
    /// Rotation in degrees, with `Auto` reported as 360.
    pub fn degrees(self) -> u16 {
        match self {
            Rotation::None => 0,
            Rotation::Rotate90 => 90,
            Rotation::Rotate180 => 180,
            Rotation::Rotate270 => 270,
            Rotation::Auto => 360,
        }
    }
}

impl TryFrom<u16> for Rotation {
    type Error = InvalidRotation;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Rotation::None),
            90 => Ok(Rotation::Rotate90),
            180 => Ok(Rotation::Rotate180),
            270 => Ok(Rotation::Rotate270),
            360 => Ok(Rotation::Auto),
            other => Err(InvalidRotation(other)),
        }
    }
}

impl From<Rotation> for u16 {
    fn from(rotation: Rotation) -> Self {
        rotation.degrees()
    }
}

/// Geometric and quality options for a single transform call.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Options {
    /// Target width. A value in (0, 1) is a fraction of the source width,
    /// a negative value or 0 leaves the width unconstrained, anything else
    /// is an absolute pixel count.
    pub width: f64,
    /// Target height, interpreted like `width` against the source height.
    pub height: f64,
    /// Fit inside the target box instead of cropping to it.
    pub fit: bool,
    /// Allow the output to be larger than the source.
    pub scale_up: bool,
    pub flip_vertical: bool,
    pub flip_horizontal: bool,
    pub rotate: Rotation,
    /// JPEG quality (1-100). 0 selects the configured default.
    pub quality: u8,
}

impl Options {
    /// Create options that request no transformation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether these options ask for any change at all.
    ///
    /// Purely syntactic: it never looks at image data, so a request that
    /// returns `false` here never reaches a codec.
    pub fn requires_transform(&self) -> bool {
        self.width != 0.0
            || self.height != 0.0
            || self.flip_vertical
            || self.flip_horizontal
            || self.rotate != Rotation::None
    }
}
