//! Image encoding for the transform pipeline.
//!
//! This module provides the per-format encode primitives:
//! - JPEG with a quality setting (lossy)
//! - PNG (lossless, no quality parameter)
//!
//! GIF output is produced by [`crate::animation`], which owns the whole
//! container including frame timing.

mod jpeg;
mod png;

use thiserror::Error;

pub use jpeg::{encode_jpeg, encode_jpeg_image};
pub use png::encode_png;

/// Errors that can occur while re-encoding a transformed image.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 3), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// Output is larger than the container can describe
    #[error("Dimensions {width}x{height} exceed the {format} limit")]
    DimensionsTooLarge {
        format: &'static str,
        width: u32,
        height: u32,
    },

    /// The underlying encoder failed
    #[error("{format} encoding failed: {message}")]
    EncodingFailed {
        format: &'static str,
        message: String,
    },
}
