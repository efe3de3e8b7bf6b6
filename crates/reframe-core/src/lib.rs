//! Reframe Core - format-preserving image transforms
//!
//! This crate resizes, flips and rotates encoded GIF, JPEG and PNG images and
//! re-encodes them in the same format. Animated GIFs are transformed frame by
//! frame with their timing, disposal and loop count kept intact.
//!
//! The entry point is [`transform`] (default configuration) or
//! [`Transformer::transform`] for a host-supplied [`TransformConfig`].

pub mod animation;
pub mod config;
pub mod decode;
pub mod encode;
pub mod options;
pub mod pipeline;
pub mod transform;

#[cfg(test)]
mod fixtures;

pub use config::{FilterType, TransformConfig, DEFAULT_QUALITY};
pub use decode::{DecodeError, ImageFormat, MetadataError};
pub use encode::EncodeError;
pub use options::{InvalidRotation, Options, Rotation};
pub use pipeline::{requires_transform, transform, Stage, TransformError, Transformer};
pub use transform::{resize_params, ResizeParams};
