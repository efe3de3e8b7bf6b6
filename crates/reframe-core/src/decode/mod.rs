//! Image decoding for the transform pipeline.
//!
//! This module provides:
//! - Container format sniffing (`ImageFormat::detect`)
//! - Decoding encoded bytes into a pixel buffer (`decode`)
//! - Reading the EXIF orientation tag from the original bytes (`read_orientation`)
//!
//! The codecs themselves come from the `image` and `kamadak-exif` crates;
//! this module only adapts their errors and results to the pipeline's types.

mod orientation;
mod types;

use std::io::Cursor;

use image::{ImageError, ImageReader};

pub use orientation::{read_orientation, MetadataError, Orientation};
pub use types::{DecodeError, DecodedImage, ImageFormat};

/// Decode an encoded GIF, JPEG, PNG (or other supported) image.
///
/// # Errors
///
/// Returns `DecodeError::UnsupportedFormat` if the format cannot be recognized
/// or has no decoder, and `DecodeError::CorruptedFile` if decoding fails.
pub fn decode(bytes: &[u8]) -> Result<DecodedImage, DecodeError> {
    let format = ImageFormat::detect(bytes)?;

    let reader = ImageReader::with_format(Cursor::new(bytes), format.to_image_format());
    let pixels = reader.decode().map_err(|e| match e {
        ImageError::Unsupported(_) => DecodeError::UnsupportedFormat,
        other => DecodeError::CorruptedFile(other.to_string()),
    })?;

    Ok(DecodedImage::new(pixels, format))
}
