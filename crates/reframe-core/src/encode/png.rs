//! PNG encoding.

use std::io::Cursor;

use image::codecs::png::PngEncoder;
use image::{DynamicImage, ImageEncoder};

use super::EncodeError;

/// Encode a transformed image as PNG, keeping its color type.
pub fn encode_png(image: &DynamicImage) -> Result<Vec<u8>, EncodeError> {
    let (width, height) = (image.width(), image.height());
    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidDimensions { width, height });
    }

    let mut buffer = Cursor::new(Vec::new());
    PngEncoder::new(&mut buffer)
        .write_image(image.as_bytes(), width, height, image.color().into())
        .map_err(|e| EncodeError::EncodingFailed {
            format: "png",
            message: e.to_string(),
        })?;

    Ok(buffer.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_png_signature() {
        let img = DynamicImage::ImageRgb8(crate::fixtures::gradient(10, 10));
        let bytes = encode_png(&img).unwrap();
        assert_eq!(&bytes[0..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn test_encode_png_is_lossless() {
        let img = DynamicImage::ImageRgba8(crate::fixtures::distinct_rgba(9, 7));
        let bytes = encode_png(&img).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!(decoded, img);
    }

    #[test]
    fn test_encode_png_empty() {
        let img = DynamicImage::new_rgba8(0, 0);
        assert!(matches!(
            encode_png(&img),
            Err(EncodeError::InvalidDimensions { .. })
        ));
    }
}
