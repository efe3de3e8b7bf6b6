//! JPEG encoding.
//!
//! Uses the `image` crate's baseline JPEG encoder. JPEG carries no alpha, so
//! color images are flattened to RGB8; grayscale stays single-channel.

use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ExtendedColorType, ImageEncoder};

use super::EncodeError;

/// Encode RGB pixel data to JPEG bytes.
///
/// # Arguments
///
/// * `pixels` - RGB pixel data (3 bytes per pixel, row-major order)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `quality` - JPEG quality (1-100, where 100 is highest quality)
///
/// Out-of-range quality values are clamped to 1-100.
pub fn encode_jpeg(
    pixels: &[u8],
    width: u32,
    height: u32,
    quality: u8,
) -> Result<Vec<u8>, EncodeError> {
    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidDimensions { width, height });
    }

    let expected_len = (width as usize) * (height as usize) * 3;
    if pixels.len() != expected_len {
        return Err(EncodeError::InvalidPixelData {
            expected: expected_len,
            actual: pixels.len(),
        });
    }

    write_jpeg(pixels, width, height, ExtendedColorType::Rgb8, quality)
}

/// Encode a transformed image as JPEG.
pub fn encode_jpeg_image(image: &DynamicImage, quality: u8) -> Result<Vec<u8>, EncodeError> {
    let (width, height) = (image.width(), image.height());
    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidDimensions { width, height });
    }

    match image {
        DynamicImage::ImageLuma8(gray) => {
            write_jpeg(gray.as_raw(), width, height, ExtendedColorType::L8, quality)
        }
        other => encode_jpeg(other.to_rgb8().as_raw(), width, height, quality),
    }
}

fn write_jpeg(
    pixels: &[u8],
    width: u32,
    height: u32,
    color: ExtendedColorType,
    quality: u8,
) -> Result<Vec<u8>, EncodeError> {
    let quality = quality.clamp(1, 100);
    let mut buffer = Cursor::new(Vec::new());

    JpegEncoder::new_with_quality(&mut buffer, quality)
        .write_image(pixels, width, height, color)
        .map_err(|e| EncodeError::EncodingFailed {
            format: "jpeg",
            message: e.to_string(),
        })?;

    Ok(buffer.into_inner())
}


// ============================================================================
// Property-Based Tests
// ============================================================================
