//! Resize planning and the three resize modes.
//!
//! `resize_params` turns the caller's width/height into target pixel
//! dimensions. A 0 in a target dimension means "derive from the other
//! dimension, keeping the aspect ratio".

use image::DynamicImage;
use serde::{Deserialize, Serialize};

use crate::config::FilterType;
use crate::options::Options;

/// Output of the resize planner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ResizeParams {
    /// Target width, or 0 when unconstrained.
    pub width: u32,
    /// Target height, or 0 when unconstrained.
    pub height: u32,
    /// Whether a resize is needed at all.
    pub resize: bool,
}

/// Convert one requested dimension into pixels against the source dimension.
///
/// Values strictly between 0 and 1 are fractions of the source, negative
/// values are unconstrained, anything else is truncated to whole pixels.
/// Exactly 1.0 therefore means one pixel.
fn target_dimension(requested: f64, source: u32) -> u32 {
    if 0.0 < requested && requested < 1.0 {
        (source as f64 * requested) as u32
    } else if requested < 0.0 {
        0
    } else {
        requested as u32
    }
}

/// Decide whether an image of `img_width` x `img_height` needs resizing for
/// `options`, and to what size.
///
/// Unless `scale_up` is set, targets are clamped to the source size. When the
/// clamped targets match the source (or are unconstrained), no resize is
/// needed and both returned dimensions are 0.
pub fn resize_params(img_width: u32, img_height: u32, options: &Options) -> ResizeParams {
    let mut width = target_dimension(options.width, img_width);
    let mut height = target_dimension(options.height, img_height);

    if !options.scale_up {
        width = width.min(img_width);
        height = height.min(img_height);
    }

    if (width == img_width || width == 0) && (height == img_height || height == 0) {
        return ResizeParams::default();
    }

    ResizeParams {
        width,
        height,
        resize: true,
    }
}

/// Dimensions that fit `width` x `height` inside `max_width` x `max_height`
/// while preserving the aspect ratio. A 0 bound is unconstrained. Images that
/// already fit are left at their size.
pub(crate) fn fit_dimensions(
    width: u32,
    height: u32,
    max_width: u32,
    max_height: u32,
) -> (u32, u32) {
    if width == 0 || height == 0 {
        return (width, height);
    }

    let fits_width = max_width == 0 || width <= max_width;
    let fits_height = max_height == 0 || height <= max_height;
    if fits_width && fits_height {
        return (width, height);
    }

    let width_ratio = if max_width == 0 {
        f64::INFINITY
    } else {
        max_width as f64 / width as f64
    };
    let height_ratio = if max_height == 0 {
        f64::INFINITY
    } else {
        max_height as f64 / height as f64
    };

    // The derived side truncates.
    if width_ratio <= height_ratio {
        let new_height = (height as f64 * max_width as f64 / width as f64) as u32;
        (max_width, new_height.max(1))
    } else {
        let new_width = (width as f64 * max_height as f64 / height as f64) as u32;
        (new_width.max(1), max_height)
    }
}

/// Dimensions for a proportional resize driven by the single nonzero target.
pub(crate) fn proportional_dimensions(
    width: u32,
    height: u32,
    target_width: u32,
    target_height: u32,
) -> (u32, u32) {
    if target_height == 0 {
        let new_height = (height as f64 * target_width as f64 / width as f64).round() as u32;
        (target_width, new_height.max(1))
    } else {
        let new_width = (width as f64 * target_height as f64 / height as f64).round() as u32;
        (new_width.max(1), target_height)
    }
}

/// Apply a planned resize.
///
/// - `fit`: shrink to fit inside the target box, never cropping.
/// - one target dimension 0: proportional resize driven by the other.
/// - both nonzero: scale to cover the box and crop the overflow around the
///   center.
pub fn apply_resize(
    image: DynamicImage,
    params: ResizeParams,
    fit: bool,
    filter: FilterType,
) -> DynamicImage {
    if !params.resize {
        return image;
    }

    let filter = filter.to_image_filter();
    let (src_width, src_height) = (image.width(), image.height());

    if fit {
        let (w, h) = fit_dimensions(src_width, src_height, params.width, params.height);
        if (w, h) == (src_width, src_height) {
            return image;
        }
        image.resize_exact(w, h, filter)
    } else if params.width == 0 || params.height == 0 {
        let (w, h) = proportional_dimensions(src_width, src_height, params.width, params.height);
        image.resize_exact(w, h, filter)
    } else {
        image.resize_to_fill(params.width, params.height, filter)
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn source_strategy() -> impl Strategy<Value = (u32, u32)> {
        (1u32..=4000, 1u32..=4000)
    }

    fn request_strategy() -> impl Strategy<Value = f64> {
        prop_oneof![
            Just(0.0),
            -100.0f64..0.0,
            0.001f64..0.999,
            1.0f64..8000.0,
        ]
    }

    proptest! {
        /// Property: Without scale_up, targets never exceed the source.
        #[test]
        fn prop_no_enlarging_without_scale_up(
            (img_w, img_h) in source_strategy(),
            width in request_strategy(),
            height in request_strategy(),
        ) {
            let options = Options { width, height, ..Default::default() };
            let params = resize_params(img_w, img_h, &options);
            prop_assert!(params.width <= img_w);
            prop_assert!(params.height <= img_h);
        }

        /// Property: A no-op plan always reports zero dimensions.
        #[test]
        fn prop_noop_has_zero_dimensions(
            (img_w, img_h) in source_strategy(),
            width in request_strategy(),
            height in request_strategy(),
            scale_up in any::<bool>(),
        ) {
            let options = Options { width, height, scale_up, ..Default::default() };
            let params = resize_params(img_w, img_h, &options);
            if !params.resize {
                prop_assert_eq!((params.width, params.height), (0, 0));
            } else {
                prop_assert!(params.width != 0 || params.height != 0);
            }
        }

        /// Property: Fit dimensions stay inside the box and never enlarge.
        #[test]
        fn prop_fit_stays_inside_box(
            (img_w, img_h) in source_strategy(),
            (max_w, max_h) in (0u32..=2000, 0u32..=2000),
        ) {
            let (w, h) = fit_dimensions(img_w, img_h, max_w, max_h);
            prop_assert!(w >= 1 && h >= 1);
            prop_assert!(w <= img_w && h <= img_h);
            if max_w > 0 {
                prop_assert!(w <= max_w);
            }
            if max_h > 0 {
                prop_assert!(h <= max_h);
            }
        }
    }
}
