//! The transform orchestrator.
//!
//! A call runs straight through:
//!
//! ```text
//! no-op check -> decode -> resolve orientation -> dispatch on format -> encode
//! ```
//!
//! A request that asks for nothing returns the input bytes untouched before
//! any codec is involved. Every failure aborts the call; there is never
//! partial output.

use thiserror::Error;
use tracing::debug;

use crate::animation::transform_gif;
use crate::config::TransformConfig;
use crate::decode::{decode, DecodeError, ImageFormat, MetadataError};
use crate::encode::{encode_jpeg_image, encode_png, EncodeError};
use crate::options::Options;
use crate::transform::{resolve_orientation, transform_image};

/// Pipeline stage an error came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Decode,
    Metadata,
    Encode,
}

/// Errors returned by [`Transformer::transform`].
#[derive(Debug, Error)]
pub enum TransformError {
    #[error("decode failed: {0}")]
    Decode(#[from] DecodeError),

    #[error("orientation metadata unreadable: {0}")]
    Metadata(#[from] MetadataError),

    #[error("encode failed: {0}")]
    Encode(#[from] EncodeError),
}

impl TransformError {
    /// The stage that failed.
    pub fn stage(&self) -> Stage {
        match self {
            TransformError::Decode(_) => Stage::Decode,
            TransformError::Metadata(_) => Stage::Metadata,
            TransformError::Encode(_) => Stage::Encode,
        }
    }
}

/// Runs transforms with a fixed configuration.
///
/// Holds no mutable state, so one value can serve concurrent calls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Transformer {
    config: TransformConfig,
}

impl Transformer {
    pub fn new(config: TransformConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TransformConfig {
        &self.config
    }

    /// Transform `bytes` (an encoded GIF, JPEG or PNG) according to `options`.
    ///
    /// The result is encoded in the same container format as the input.
    /// Formats that decode but have no encoder here are returned unchanged.
    pub fn transform(&self, bytes: &[u8], options: &Options) -> Result<Vec<u8>, TransformError> {
        if !options.requires_transform() {
            debug!("no transform requested, returning original bytes");
            return Ok(bytes.to_vec());
        }

        let decoded = decode(bytes)?;
        debug!(
            format = decoded.format.name(),
            width = decoded.width(),
            height = decoded.height(),
            "decoded image"
        );

        let options = resolve_orientation(bytes, *options)?;
        let filter = self.config.filter;

        match decoded.format {
            ImageFormat::Gif => transform_gif(bytes, &options, filter),
            ImageFormat::Jpeg => {
                let quality = self.config.quality_for(options.quality);
                let image = transform_image(decoded.pixels, &options, filter);
                Ok(encode_jpeg_image(&image, quality)?)
            }
            ImageFormat::Png => {
                let image = transform_image(decoded.pixels, &options, filter);
                Ok(encode_png(&image)?)
            }
            ImageFormat::Other(_) => {
                debug!(
                    format = decoded.format.name(),
                    "no encoder for format, returning original bytes"
                );
                Ok(bytes.to_vec())
            }
        }
    }
}

/// Whether `options` request any change. See [`Options::requires_transform`].
pub fn requires_transform(options: &Options) -> bool {
    options.requires_transform()
}

/// Transform `bytes` with the default configuration (quality 95, Lanczos3).
pub fn transform(bytes: &[u8], options: &Options) -> Result<Vec<u8>, TransformError> {
    Transformer::default().transform(bytes, options)
}
