//! The geometric transformer: resize, flip and rotate one pixel buffer.
//!
//! Operations always run in the same order:
//! 1. Resize (fit, proportional or crop-to-box)
//! 2. Vertical flip
//! 3. Horizontal flip
//! 4. Rotation
//!
//! Rotation is counter-clockwise. By the time a buffer gets here the
//! auto-orientation sentinel must already be resolved; an unresolved
//! `Rotation::Auto` is treated as no rotation.

use image::DynamicImage;

use super::resize::{apply_resize, resize_params};
use crate::config::FilterType;
use crate::options::{Options, Rotation};

/// Apply every geometric operation in `options` to `image`.
pub fn transform_image(image: DynamicImage, options: &Options, filter: FilterType) -> DynamicImage {
    let params = resize_params(image.width(), image.height(), options);
    let mut image = apply_resize(image, params, options.fit, filter);

    if options.flip_vertical {
        image = image.flipv();
    }
    if options.flip_horizontal {
        image = image.fliph();
    }

    rotate(image, options.rotate)
}

/// Rotate counter-clockwise by a quarter-turn multiple.
pub fn rotate(image: DynamicImage, rotation: Rotation) -> DynamicImage {
    match rotation {
        Rotation::Rotate90 => image.rotate270(),
        Rotation::Rotate180 => image.rotate180(),
        Rotation::Rotate270 => image.rotate90(),
        Rotation::None | Rotation::Auto => image,
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
