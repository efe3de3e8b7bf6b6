//! Geometric transformation of decoded images.
//!
//! - `resize` plans the target size and applies fit, proportional or
//!   crop-to-box resizing
//! - `geometry` runs resize, flips and rotation in a fixed order
//! - `orient` turns the auto-orientation sentinel into concrete
//!   rotate/flip values from EXIF
//!
//! # Coordinate System
//!
//! - Rotation angles are in degrees, counter-clockwise
//! - Origin is the top-left corner

mod geometry;
mod orient;
mod resize;

pub use geometry::{rotate, transform_image};
pub use orient::{apply_orientation_tag, resolve_orientation};
pub use resize::{apply_resize, resize_params, ResizeParams};
