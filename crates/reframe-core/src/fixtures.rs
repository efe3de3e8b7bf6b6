//! Test fixtures: small encoded images built in memory.

use std::borrow::Cow;
use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{DynamicImage, ExtendedColorType, ImageEncoder, RgbImage, RgbaImage};

/// RGB image where every pixel encodes its position.
pub fn gradient(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([
            ((x * 255) / width.max(1)) as u8,
            ((y * 255) / height.max(1)) as u8,
            128,
        ])
    })
}

/// RGBA image with one distinct opaque color per pixel (up to 256 pixels).
pub fn distinct_rgba(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, y| {
        let i = (y * width + x) as u8;
        image::Rgba([i, 255 - i, i.wrapping_mul(7), 255])
    })
}

pub fn jpeg(width: u32, height: u32) -> Vec<u8> {
    let img = gradient(width, height);
    let mut buffer = Cursor::new(Vec::new());
    JpegEncoder::new_with_quality(&mut buffer, 90)
        .write_image(img.as_raw(), width, height, ExtendedColorType::Rgb8)
        .unwrap();
    buffer.into_inner()
}

pub fn png(width: u32, height: u32) -> Vec<u8> {
    png_from(&distinct_rgba(width, height))
}

pub fn png_from(img: &RgbaImage) -> Vec<u8> {
    let mut buffer = Cursor::new(Vec::new());
    PngEncoder::new(&mut buffer)
        .write_image(img.as_raw(), img.width(), img.height(), ExtendedColorType::Rgba8)
        .unwrap();
    buffer.into_inner()
}

pub fn bmp(width: u32, height: u32) -> Vec<u8> {
    let mut buffer = Cursor::new(Vec::new());
    DynamicImage::ImageRgb8(gradient(width, height))
        .write_to(&mut buffer, image::ImageFormat::Bmp)
        .unwrap();
    buffer.into_inner()
}

/// Splice a big-endian EXIF APP1 segment holding a single SHORT entry
/// right after the JPEG SOI marker.
fn with_exif_entry(jpeg: &[u8], tag: u16, value: u16) -> Vec<u8> {
    let mut app1 = vec![0xFF, 0xE1, 0x00, 0x22];
    app1.extend_from_slice(b"Exif\0\0");
    app1.extend_from_slice(b"MM\x00\x2A\x00\x00\x00\x08");
    app1.extend_from_slice(&[0x00, 0x01]);
    app1.extend_from_slice(&tag.to_be_bytes());
    app1.extend_from_slice(&[0x00, 0x03, 0x00, 0x00, 0x00, 0x01]);
    app1.extend_from_slice(&value.to_be_bytes());
    app1.extend_from_slice(&[0x00, 0x00]);
    app1.extend_from_slice(&[0x00, 0x00, 0x00, 0x00]);

    let mut out = jpeg[..2].to_vec();
    out.extend_from_slice(&app1);
    out.extend_from_slice(&jpeg[2..]);
    out
}

pub fn with_exif_orientation(jpeg: &[u8], orientation: u16) -> Vec<u8> {
    with_exif_entry(jpeg, 0x0112, orientation)
}

/// EXIF block that has an ImageWidth entry but no orientation.
pub fn with_exif_image_width(jpeg: &[u8], width: u16) -> Vec<u8> {
    with_exif_entry(jpeg, 0x0100, width)
}

/// Palette where index `i` is the color `distinct_rgba` gives pixel `i`.
pub fn distinct_palette() -> Vec<u8> {
    (0..=255u8)
        .flat_map(|i| [i, 255 - i, i.wrapping_mul(7)])
        .collect()
}

/// Animated GIF with `frames` full-canvas frames, each using its own slice
/// of the global palette. Frame `n` has a delay of `(n + 1) * 10` and the
/// container repeats three times.
pub fn animated_gif(width: u16, height: u16, frames: u16) -> Vec<u8> {
    let pixels = width as usize * height as usize;
    let palette = distinct_palette();
    let mut buffer = Vec::new();
    {
        let mut encoder = gif::Encoder::new(&mut buffer, width, height, &palette).unwrap();
        encoder.set_repeat(gif::Repeat::Finite(3)).unwrap();
        for n in 0..frames {
            let indices: Vec<u8> = (0..pixels)
                .map(|i| ((n as usize * pixels + i) % 256) as u8)
                .collect();
            let frame = gif::Frame {
                width,
                height,
                delay: (n + 1) * 10,
                dispose: gif::DisposalMethod::Keep,
                buffer: Cow::Owned(indices),
                ..gif::Frame::default()
            };
            encoder.write_frame(&frame).unwrap();
        }
    }
    buffer
}

/// A decoded GIF frame for assertions.
pub struct GifFrame {
    pub left: u16,
    pub top: u16,
    pub width: u16,
    pub height: u16,
    pub delay: u16,
    pub dispose: gif::DisposalMethod,
    pub transparent: Option<u8>,
    pub has_local_palette: bool,
    pub rgba: Vec<u8>,
}

impl GifFrame {
    pub fn pixel(&self, x: u16, y: u16) -> [u8; 4] {
        let i = (y as usize * self.width as usize + x as usize) * 4;
        [self.rgba[i], self.rgba[i + 1], self.rgba[i + 2], self.rgba[i + 3]]
    }
}

/// Decode every frame of a GIF, returning the logical screen size, the
/// frames and the repeat count.
pub fn read_gif(bytes: &[u8]) -> ((u16, u16), Vec<GifFrame>, gif::Repeat) {
    let mut options = gif::DecodeOptions::new();
    options.set_color_output(gif::ColorOutput::RGBA);
    let mut decoder = options.read_info(Cursor::new(bytes)).unwrap();
    let screen = (decoder.width(), decoder.height());

    let mut frames = Vec::new();
    while let Some(frame) = decoder.read_next_frame().unwrap() {
        frames.push(GifFrame {
            left: frame.left,
            top: frame.top,
            width: frame.width,
            height: frame.height,
            delay: frame.delay,
            dispose: frame.dispose,
            transparent: frame.transparent,
            has_local_palette: frame.palette.is_some(),
            rgba: frame.buffer.to_vec(),
        });
    }
    (screen, frames, decoder.repeat())
}
