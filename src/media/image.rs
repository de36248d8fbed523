// SPDX-License-Identifier: MPL-2.0
//! Image loading and decoding from the supported raster formats and SVG.

use crate::error::{Error, Result};
use iced::widget::image;
use image_rs::{DynamicImage, GenericImageView, ImageFormat, RgbaImage};
use resvg::usvg;
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// A decoded image together with the handle the display widget draws.
///
/// The decoded buffer is shared behind an `Arc` so the value can travel in
/// messages without copying pixels. Transforms build a new `ImageData`.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
    /// Container format detected from the file contents, `None` for SVG.
    pub format: Option<ImageFormat>,
    buffer: Arc<DynamicImage>,
}

impl ImageData {
    /// Wraps a decoded buffer, uploading an RGBA copy for display.
    #[must_use]
    pub fn from_dynamic(buffer: DynamicImage, format: Option<ImageFormat>) -> Self {
        let (width, height) = buffer.dimensions();
        let handle = image::Handle::from_rgba(width, height, buffer.to_rgba8().into_raw());
        Self {
            handle,
            width,
            height,
            format,
            buffer: Arc::new(buffer),
        }
    }

    /// The decoded pixels, in the color type the decoder produced.
    pub fn buffer(&self) -> &DynamicImage {
        &self.buffer
    }
}

/// Loads an image from disk.
///
/// Raster formats are decoded by the `image` crate after sniffing the
/// contents, so a file with a misleading extension still opens. SVG files
/// are rasterized at their intrinsic size.
///
/// # Errors
///
/// - [`Error::Io`] when the file cannot be read
/// - [`Error::Decode`] / [`Error::UnsupportedFormat`] when decoding fails
/// - [`Error::Svg`] when the SVG cannot be parsed or has no area
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<ImageData> {
    let path = path.as_ref();
    let is_svg = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));

    let bytes = fs::read(path)?;

    if is_svg {
        let buffer = rasterize_svg(&bytes)?;
        return Ok(ImageData::from_dynamic(buffer, None));
    }

    let format = image_rs::guess_format(&bytes)
        .ok()
        .or_else(|| ImageFormat::from_path(path).ok());
    let decoded = match format {
        Some(format) => image_rs::load_from_memory_with_format(&bytes, format)?,
        None => image_rs::load_from_memory(&bytes)?,
    };

    Ok(ImageData::from_dynamic(decoded, format))
}

fn rasterize_svg(bytes: &[u8]) -> Result<DynamicImage> {
    let tree = usvg::Tree::from_data(bytes, &usvg::Options::default())
        .map_err(|e| Error::Svg(e.to_string()))?;

    let size = tree.size().to_int_size();
    render_svg(&tree, size.width(), size.height()).map(DynamicImage::ImageRgba8)
}

/// Renders `tree` scaled to `width` x `height` straight-alpha RGBA pixels.
pub(crate) fn render_svg(tree: &usvg::Tree, width: u32, height: u32) -> Result<RgbaImage> {
    if width == 0 || height == 0 {
        return Err(Error::Svg("SVG has empty dimensions".into()));
    }

    let mut pixmap = tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| Error::Svg("Failed to allocate SVG pixmap".into()))?;
    let source = tree.size();
    let transform = tiny_skia::Transform::from_scale(
        width as f32 / source.width(),
        height as f32 / source.height(),
    );
    resvg::render(tree, transform, &mut pixmap.as_mut());

    // tiny-skia stores premultiplied alpha.
    let pixels: Vec<u8> = pixmap
        .pixels()
        .iter()
        .flat_map(|pixel| {
            let color = pixel.demultiply();
            [color.red(), color.green(), color.blue(), color.alpha()]
        })
        .collect();

    RgbaImage::from_raw(width, height, pixels)
        .ok_or_else(|| Error::Svg("SVG pixel buffer has unexpected size".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{Rgb, RgbImage, Rgba};
    use tempfile::tempdir;

    #[test]
    fn load_png_image_returns_expected_dimensions() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let image_path = temp_dir.path().join("sample.png");
        RgbaImage::from_pixel(4, 2, Rgba([255, 0, 0, 255]))
            .save(&image_path)
            .expect("failed to write temporary png");

        let data = load_image(&image_path).expect("png should load successfully");
        assert_eq!((data.width, data.height), (4, 2));
        assert_eq!(data.format, Some(ImageFormat::Png));
    }

    #[test]
    fn decoded_buffer_keeps_source_color_type() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let image_path = temp_dir.path().join("rgb.bmp");
        RgbImage::from_pixel(3, 3, Rgb([1, 2, 3]))
            .save(&image_path)
            .expect("failed to write bmp");

        let data = load_image(&image_path).expect("bmp should load");
        assert_eq!(data.buffer().color(), image_rs::ColorType::Rgb8);
        assert_eq!(data.format, Some(ImageFormat::Bmp));
    }

    #[test]
    fn format_is_sniffed_from_contents() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let png_path = temp_dir.path().join("real.png");
        RgbaImage::from_pixel(2, 2, Rgba([0, 0, 0, 255]))
            .save(&png_path)
            .expect("write png");
        let misnamed = temp_dir.path().join("actually-png.jpg");
        fs::copy(&png_path, &misnamed).expect("copy png");

        let data = load_image(&misnamed).expect("misnamed png should still load");
        assert_eq!(data.format, Some(ImageFormat::Png));
    }

    #[test]
    fn load_svg_image_rasterizes_successfully() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let svg_path = temp_dir.path().join("sample.svg");
        let svg_content = r#"<svg xmlns="http://www.w3.org/2000/svg" width="6" height="3">
                <rect width="6" height="3" fill="blue" />
            </svg>"#;
        fs::write(&svg_path, svg_content).expect("failed to write svg");

        let data = load_image(&svg_path).expect("svg should load successfully");
        assert_eq!((data.width, data.height), (6, 3));
        assert!(data.format.is_none());
        let pixel = data.buffer().to_rgba8().get_pixel(1, 1).0;
        assert_eq!(pixel, [0, 0, 255, 255]);
    }

    #[test]
    fn load_missing_image_returns_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");

        match load_image(temp_dir.path().join("does_not_exist.png")) {
            Err(Error::Io(_)) => {}
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn load_invalid_png_bytes_returns_decode_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let bad_path = temp_dir.path().join("invalid.png");
        fs::write(&bad_path, b"not a png").expect("failed to write invalid data");

        match load_image(&bad_path) {
            Err(Error::Decode(message) | Error::UnsupportedFormat(message)) => {
                assert!(!message.is_empty())
            }
            other => panic!("expected decode error for invalid png, got {other:?}"),
        }
    }

    #[test]
    fn load_invalid_svg_returns_svg_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let bad_svg_path = temp_dir.path().join("broken.svg");
        fs::write(&bad_svg_path, "<svg>oops").expect("failed to write invalid svg");

        match load_image(&bad_svg_path) {
            Err(Error::Svg(message)) => assert!(!message.is_empty()),
            other => panic!("expected Svg error, got {other:?}"),
        }
    }
}
