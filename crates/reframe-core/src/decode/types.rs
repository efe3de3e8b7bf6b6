//! Core types for image decoding.

use image::DynamicImage;
use thiserror::Error;

/// Error types for image decoding operations.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The file format is not recognized or no decoder is available for it.
    #[error("Invalid or unsupported image format")]
    UnsupportedFormat,

    /// The image file is corrupted or incomplete.
    #[error("Corrupted or incomplete image file: {0}")]
    CorruptedFile(String),
}

/// Container format of an encoded image.
///
/// Resolved once after decoding and used to pick the encode path. Only GIF,
/// JPEG and PNG are re-encoded; anything else the decoder understands is
/// carried as `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Gif,
    Jpeg,
    Png,
    Other(image::ImageFormat),
}

impl ImageFormat {
    /// Sniff the container format from the leading magic bytes.
    pub fn detect(bytes: &[u8]) -> Result<Self, DecodeError> {
        image::guess_format(bytes)
            .map(Self::from)
            .map_err(|_| DecodeError::UnsupportedFormat)
    }

    /// Short lowercase name, e.g. `"jpeg"`.
    pub fn name(self) -> &'static str {
        match self {
            ImageFormat::Gif => "gif",
            ImageFormat::Jpeg => "jpeg",
            ImageFormat::Png => "png",
            ImageFormat::Other(format) => format.extensions_str().first().copied().unwrap_or("unknown"),
        }
    }

    /// The equivalent `image` crate format.
    pub fn to_image_format(self) -> image::ImageFormat {
        match self {
            ImageFormat::Gif => image::ImageFormat::Gif,
            ImageFormat::Jpeg => image::ImageFormat::Jpeg,
            ImageFormat::Png => image::ImageFormat::Png,
            ImageFormat::Other(format) => format,
        }
    }
}

impl From<image::ImageFormat> for ImageFormat {
    fn from(format: image::ImageFormat) -> Self {
        match format {
            image::ImageFormat::Gif => ImageFormat::Gif,
            image::ImageFormat::Jpeg => ImageFormat::Jpeg,
            image::ImageFormat::Png => ImageFormat::Png,
            other => ImageFormat::Other(other),
        }
    }
}

/// A decoded image together with the format it was decoded from.
///
/// For animated GIFs `pixels` holds the first frame only; the full container
/// is handled by [`crate::animation`].
#[derive(Debug, Clone)]
pub struct DecodedImage {
    pub pixels: DynamicImage,
    pub format: ImageFormat,
}

impl DecodedImage {
    pub fn new(pixels: DynamicImage, format: ImageFormat) -> Self {
        Self { pixels, format }
    }

    /// Image width in pixels.
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    /// Image height in pixels.
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }
}
