//! Immutable pipeline configuration.
//!
//! A `TransformConfig` is built once by the host and handed to a
//! [`Transformer`](crate::Transformer). Nothing in the pipeline mutates it,
//! so a single value can be shared freely across threads.

use serde::{Deserialize, Serialize};

/// JPEG quality used when the caller passes `quality: 0`.
pub const DEFAULT_QUALITY: u8 = 95;

/// Filter type for image resizing operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FilterType {
    /// Nearest neighbor interpolation (fastest, lowest quality).
    Nearest,
    /// Bilinear interpolation (fast, acceptable quality).
    Bilinear,
    /// Lanczos3 interpolation (slower, highest quality).
    #[default]
    Lanczos3,
}

impl FilterType {
    /// Convert to the image crate's FilterType.
    pub fn to_image_filter(self) -> image::imageops::FilterType {
        match self {
            FilterType::Nearest => image::imageops::FilterType::Nearest,
            FilterType::Bilinear => image::imageops::FilterType::Triangle,
            FilterType::Lanczos3 => image::imageops::FilterType::Lanczos3,
        }
    }
}

/// Process-wide constants for the transform pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformConfig {
    /// JPEG quality applied when `Options::quality` is 0.
    pub default_quality: u8,
    /// Resampling filter for every resize.
    pub filter: FilterType,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            default_quality: DEFAULT_QUALITY,
            filter: FilterType::Lanczos3,
        }
    }
}

impl TransformConfig {
    /// Quality to encode with for a requested quality value.
    pub fn quality_for(&self, requested: u8) -> u8 {
        if requested == 0 {
            self.default_quality
        } else {
            requested
        }
    }
}
