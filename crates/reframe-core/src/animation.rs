//! Frame-by-frame transformation of animated GIFs.
//!
//! Each frame is composited onto a canvas the size of the logical screen,
//! honoring transparency and the previous frame's disposal method, so the
//! geometric transformer always sees what a viewer would see. The
//! transformed canvas is mapped back onto the frame's own color table
//! (local if present, else global) and written as a full-canvas frame.
//!
//! Per-frame delay, disposal and transparency, the global color table and
//! the container's loop count are carried over unchanged. The output is
//! always a GIF, even when it ends up with a single frame.
//!
//! Frames are processed strictly in order.

use std::borrow::Cow;
use std::collections::HashMap;
use std::io::Cursor;

use gif::{ColorOutput, DecodeOptions, DisposalMethod, Encoder, Repeat};
use image::{DynamicImage, Rgba, RgbaImage};
use tracing::{debug, trace};

use crate::config::FilterType;
use crate::decode::DecodeError;
use crate::encode::EncodeError;
use crate::options::Options;
use crate::pipeline::TransformError;
use crate::transform::transform_image;

/// Alpha below which a transformed pixel is written as the transparent index.
const ALPHA_THRESHOLD: u8 = 128;

/// A transformed frame ready for encoding.
struct OutputFrame {
    width: u16,
    height: u16,
    indices: Vec<u8>,
    palette: Option<Vec<u8>>,
    transparent: Option<u8>,
    delay: u16,
    dispose: DisposalMethod,
}

/// Transform every frame of the GIF in `bytes` and re-encode the container.
///
/// # Errors
///
/// Malformed GIF data is reported as a decode error; output the encoder
/// rejects (for example a canvas larger than 65535 pixels on a side) as an
/// encode error.
pub fn transform_gif(
    bytes: &[u8],
    options: &Options,
    filter: FilterType,
) -> Result<Vec<u8>, TransformError> {
    let mut decode_options = DecodeOptions::new();
    decode_options.set_color_output(ColorOutput::Indexed);
    let mut decoder = decode_options
        .read_info(Cursor::new(bytes))
        .map_err(gif_decode_error)?;

    let global_palette = decoder.global_palette().map(<[u8]>::to_vec);
    let mut canvas = RgbaImage::new(decoder.width() as u32, decoder.height() as u32);
    let mut frames = Vec::new();

    while let Some(frame) = decoder.read_next_frame().map_err(gif_decode_error)? {
        let palette = frame
            .palette
            .as_deref()
            .or(global_palette.as_deref())
            .ok_or_else(|| DecodeError::CorruptedFile("GIF frame has no color table".into()))?;

        let restore = (frame.dispose == DisposalMethod::Previous).then(|| canvas.clone());
        composite(&mut canvas, frame, palette);

        let transformed =
            transform_image(DynamicImage::ImageRgba8(canvas.clone()), options, filter).into_rgba8();
        let width = to_u16(transformed.width(), transformed.height())?;
        let height = to_u16(transformed.height(), transformed.width())?;

        trace!(
            index = frames.len(),
            delay = frame.delay,
            dispose = ?frame.dispose,
            "transformed GIF frame"
        );

        frames.push(OutputFrame {
            width,
            height,
            indices: map_to_palette(&transformed, palette, frame.transparent),
            palette: frame.palette.clone(),
            transparent: frame.transparent,
            delay: frame.delay,
            dispose: frame.dispose,
        });

        match frame.dispose {
            DisposalMethod::Background => clear_rect(
                &mut canvas,
                frame.left as u32,
                frame.top as u32,
                frame.width as u32,
                frame.height as u32,
            ),
            DisposalMethod::Previous => {
                if let Some(previous) = restore {
                    canvas = previous;
                }
            }
            DisposalMethod::Keep | DisposalMethod::Any => {}
        }
    }

    let repeat = decoder.repeat();
    debug!(frames = frames.len(), ?repeat, "re-encoding GIF");
    encode_frames(&frames, global_palette.as_deref(), repeat)
}

fn encode_frames(
    frames: &[OutputFrame],
    global_palette: Option<&[u8]>,
    repeat: Repeat,
) -> Result<Vec<u8>, TransformError> {
    let first = frames
        .first()
        .ok_or_else(|| DecodeError::CorruptedFile("GIF contains no frames".into()))?;

    let mut buffer = Vec::new();
    {
        let mut encoder = Encoder::new(
            &mut buffer,
            first.width,
            first.height,
            global_palette.unwrap_or_default(),
        )
        .map_err(gif_encode_error)?;
        encoder.set_repeat(repeat).map_err(gif_encode_error)?;

        for out in frames {
            let frame = gif::Frame {
                width: out.width,
                height: out.height,
                delay: out.delay,
                dispose: out.dispose,
                transparent: out.transparent,
                palette: out.palette.clone(),
                buffer: Cow::Borrowed(&out.indices),
                ..gif::Frame::default()
            };
            encoder.write_frame(&frame).map_err(gif_encode_error)?;
        }
    }

    Ok(buffer)
}

/// Draw the opaque pixels of `frame` onto `canvas`, clipped to the canvas.
fn composite(canvas: &mut RgbaImage, frame: &gif::Frame<'_>, palette: &[u8]) {
    let frame_width = frame.width as u32;
    for row in 0..frame.height as u32 {
        for col in 0..frame_width {
            let index = frame.buffer[(row * frame_width + col) as usize];
            if frame.transparent == Some(index) {
                continue;
            }

            let x = frame.left as u32 + col;
            let y = frame.top as u32 + row;
            if x >= canvas.width() || y >= canvas.height() {
                continue;
            }

            let base = index as usize * 3;
            if let Some(rgb) = palette.get(base..base + 3) {
                canvas.put_pixel(x, y, Rgba([rgb[0], rgb[1], rgb[2], 255]));
            }
        }
    }
}

/// Reset a rectangle of the canvas to fully transparent.
fn clear_rect(canvas: &mut RgbaImage, left: u32, top: u32, width: u32, height: u32) {
    let right = (left + width).min(canvas.width());
    let bottom = (top + height).min(canvas.height());
    for y in top..bottom {
        for x in left..right {
            canvas.put_pixel(x, y, Rgba([0, 0, 0, 0]));
        }
    }
}

/// Map every pixel onto the nearest entry of `palette`.
///
/// Pixels below the alpha threshold become the transparent index when the
/// frame has one. The transparent entry is never chosen for opaque pixels.
fn map_to_palette(image: &RgbaImage, palette: &[u8], transparent: Option<u8>) -> Vec<u8> {
    let mut cache: HashMap<[u8; 3], u8> = HashMap::new();

    image
        .pixels()
        .map(|&Rgba([r, g, b, a])| match transparent {
            Some(index) if a < ALPHA_THRESHOLD => index,
            _ => *cache
                .entry([r, g, b])
                .or_insert_with(|| nearest_index(palette, [r, g, b], transparent)),
        })
        .collect()
}

fn nearest_index(palette: &[u8], color: [u8; 3], skip: Option<u8>) -> u8 {
    let mut best = (0u8, u32::MAX);
    for (i, entry) in palette.chunks_exact(3).enumerate().take(256) {
        let index = i as u8;
        if skip == Some(index) {
            continue;
        }

        let distance: u32 = entry
            .iter()
            .zip(color)
            .map(|(&p, c)| {
                let d = p as i32 - c as i32;
                (d * d) as u32
            })
            .sum();
        if distance < best.1 {
            best = (index, distance);
            if distance == 0 {
                break;
            }
        }
    }
    best.0
}

fn to_u16(value: u32, other: u32) -> Result<u16, EncodeError> {
    u16::try_from(value).map_err(|_| EncodeError::DimensionsTooLarge {
        format: "gif",
        width: value,
        height: other,
    })
}

fn gif_decode_error(e: gif::DecodingError) -> DecodeError {
    DecodeError::CorruptedFile(e.to_string())
}

fn gif_encode_error(e: gif::EncodingError) -> EncodeError {
    EncodeError::EncodingFailed {
        format: "gif",
        message: e.to_string(),
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
