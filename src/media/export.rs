// SPDX-License-Identifier: MPL-2.0
//! Writing the displayed buffer back to disk.
//!
//! The container format follows the target extension. Paths without an
//! extension (or ending in a bare dot) receive `.png`; unknown extensions are
//! written as PNG as-is.

use crate::app::config::MAX_ICO_DIMENSION;
use crate::error::{Error, Result};
use image_rs::codecs::jpeg::JpegEncoder;
use image_rs::{ColorType, DynamicImage, GenericImageView, ImageFormat};
use std::borrow::Cow;
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

/// Container format written for `path`, falling back to PNG.
#[must_use]
pub fn save_format_for(path: &Path) -> ImageFormat {
    let ext_lower = path
        .extension()
        .and_then(|s| s.to_str())
        .map(str::to_ascii_lowercase);

    #[allow(clippy::match_same_arms)]
    match ext_lower.as_deref() {
        Some("jpg" | "jpeg") => ImageFormat::Jpeg,
        Some("png") => ImageFormat::Png,
        Some("gif") => ImageFormat::Gif,
        Some("bmp") => ImageFormat::Bmp,
        Some("ico") => ImageFormat::Ico,
        Some("tiff" | "tif") => ImageFormat::Tiff,
        Some("webp") => ImageFormat::WebP,
        _ => ImageFormat::Png,
    }
}

/// Appends `.png` to a path that carries no extension.
///
/// A trailing dot (`photo.`) counts as no extension and becomes `photo.png`.
#[must_use]
pub fn resolve_save_path(path: &Path) -> PathBuf {
    match path.extension() {
        Some(ext) if !ext.is_empty() => path.to_path_buf(),
        _ => path.with_extension("png"),
    }
}

/// Encodes `image` for the extension of `path` and writes it.
///
/// The whole file is encoded in memory first, so an encoder failure never
/// leaves a truncated file behind. Returns the path actually written.
///
/// # Errors
///
/// - [`Error::Encode`] when the buffer cannot be represented in the format,
///   including ICO images larger than 256×256
/// - [`Error::Io`] when the file cannot be written
pub fn save_image(image: &DynamicImage, path: &Path, jpeg_quality: u8) -> Result<PathBuf> {
    let target = resolve_save_path(path);
    let format = save_format_for(&target);
    let bytes = encode(image, format, jpeg_quality)?;
    fs::write(&target, bytes)?;
    Ok(target)
}

fn encode(image: &DynamicImage, format: ImageFormat, jpeg_quality: u8) -> Result<Vec<u8>> {
    let mut buffer = Cursor::new(Vec::new());

    match format {
        ImageFormat::Jpeg => {
            // JPEG has no alpha channel.
            let rgb = image.to_rgb8();
            JpegEncoder::new_with_quality(&mut buffer, jpeg_quality).encode_image(&rgb)?;
        }
        ImageFormat::Ico => {
            let (width, height) = image.dimensions();
            if width > MAX_ICO_DIMENSION || height > MAX_ICO_DIMENSION {
                return Err(Error::Encode(format!(
                    "ICO images are limited to {MAX_ICO_DIMENSION}x{MAX_ICO_DIMENSION}, got {width}x{height}"
                )));
            }
            image.to_rgba8().write_to(&mut buffer, format)?;
        }
        _ => {
            normalize_for(image, format).write_to(&mut buffer, format)?;
        }
    }

    Ok(buffer.into_inner())
}

/// Converts color types the target encoder does not accept to 8-bit RGB(A).
fn normalize_for(image: &DynamicImage, format: ImageFormat) -> Cow<'_, DynamicImage> {
    let color = image.color();
    let accepted = match format {
        ImageFormat::Png => !matches!(color, ColorType::Rgb32F | ColorType::Rgba32F),
        ImageFormat::Tiff => matches!(
            color,
            ColorType::L8
                | ColorType::L16
                | ColorType::Rgb8
                | ColorType::Rgb16
                | ColorType::Rgba8
                | ColorType::Rgba16
        ),
        ImageFormat::Gif => matches!(color, ColorType::Rgba8 | ColorType::Rgb8),
        _ => matches!(
            color,
            ColorType::L8 | ColorType::La8 | ColorType::Rgb8 | ColorType::Rgba8
        ),
    };

    if accepted {
        Cow::Borrowed(image)
    } else if color.has_alpha() {
        Cow::Owned(DynamicImage::ImageRgba8(image.to_rgba8()))
    } else {
        Cow::Owned(DynamicImage::ImageRgb8(image.to_rgb8()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{ImageBuffer, Rgba, RgbaImage};
    use tempfile::tempdir;

    fn gradient(width: u32, height: u32) -> DynamicImage {
        let mut img = RgbaImage::new(width, height);
        for (x, y, pixel) in img.enumerate_pixels_mut() {
            *pixel = Rgba([(x * 13) as u8, (y * 29) as u8, ((x + y) * 7) as u8, 200]);
        }
        DynamicImage::ImageRgba8(img)
    }

    #[test]
    fn format_follows_extension_case_insensitively() {
        assert_eq!(save_format_for(Path::new("a.JPG")), ImageFormat::Jpeg);
        assert_eq!(save_format_for(Path::new("a.jpeg")), ImageFormat::Jpeg);
        assert_eq!(save_format_for(Path::new("a.Bmp")), ImageFormat::Bmp);
        assert_eq!(save_format_for(Path::new("a.ico")), ImageFormat::Ico);
        assert_eq!(save_format_for(Path::new("a.tif")), ImageFormat::Tiff);
        assert_eq!(save_format_for(Path::new("a.webp")), ImageFormat::WebP);
        assert_eq!(save_format_for(Path::new("a.xyz")), ImageFormat::Png);
        assert_eq!(save_format_for(Path::new("noext")), ImageFormat::Png);
    }

    #[test]
    fn missing_extension_gets_png() {
        assert_eq!(
            resolve_save_path(Path::new("/tmp/out")),
            PathBuf::from("/tmp/out.png")
        );
        assert_eq!(
            resolve_save_path(Path::new("/tmp/out.bmp")),
            PathBuf::from("/tmp/out.bmp")
        );
    }

    #[test]
    fn trailing_dot_counts_as_missing_extension() {
        assert_eq!(
            resolve_save_path(Path::new("/tmp/photo.")),
            PathBuf::from("/tmp/photo.png")
        );

        let temp_dir = tempdir().expect("temp dir");
        let written = save_image(&gradient(3, 3), &temp_dir.path().join("photo."), 90)
            .expect("save with trailing dot");

        assert_eq!(written, temp_dir.path().join("photo.png"));
        assert_eq!(
            image_rs::ImageFormat::from_path(&written).expect("format from path"),
            ImageFormat::Png
        );
        assert!(!temp_dir.path().join("photo.").exists());
    }

    #[test]
    fn png_round_trip_is_pixel_identical() {
        let temp_dir = tempdir().expect("temp dir");
        let path = temp_dir.path().join("out.png");
        let image = gradient(9, 5);

        let written = save_image(&image, &path, 90).expect("save png");
        let reloaded = image_rs::open(&written).expect("reopen png");

        assert_eq!(written, path);
        assert_eq!(reloaded.to_rgba8(), image.to_rgba8());
    }

    #[test]
    fn bmp_round_trip_preserves_pixels() {
        let temp_dir = tempdir().expect("temp dir");
        let path = temp_dir.path().join("out.bmp");
        let image = DynamicImage::ImageRgb8(gradient(6, 4).to_rgb8());

        save_image(&image, &path, 90).expect("save bmp");
        let reloaded = image_rs::open(&path).expect("reopen bmp");

        assert_eq!(reloaded.to_rgb8(), image.to_rgb8());
    }

    #[test]
    fn webp_round_trip_is_lossless() {
        let temp_dir = tempdir().expect("temp dir");
        let path = temp_dir.path().join("out.webp");
        let image = gradient(7, 5);

        let written = save_image(&image, &path, 90).expect("save webp");
        let reloaded = image_rs::open(&written).expect("reopen webp");

        assert_eq!(written, path);
        assert_eq!(reloaded.dimensions(), (7, 5));
        assert_eq!(reloaded.to_rgba8(), image.to_rgba8());
    }

    #[test]
    fn jpeg_output_drops_alpha() {
        let temp_dir = tempdir().expect("temp dir");
        let path = temp_dir.path().join("out.jpg");

        save_image(&gradient(16, 16), &path, 80).expect("save jpeg");
        let reloaded = image_rs::open(&path).expect("reopen jpeg");

        assert_eq!(reloaded.dimensions(), (16, 16));
        assert!(!reloaded.color().has_alpha());
    }

    #[test]
    fn jpeg_quality_affects_file_size() {
        let temp_dir = tempdir().expect("temp dir");
        let low = temp_dir.path().join("low.jpg");
        let high = temp_dir.path().join("high.jpg");
        let image = gradient(64, 64);

        save_image(&image, &low, 10).expect("save low");
        save_image(&image, &high, 100).expect("save high");

        let low_size = fs::metadata(&low).expect("low metadata").len();
        let high_size = fs::metadata(&high).expect("high metadata").len();
        assert!(low_size < high_size);
    }

    #[test]
    fn unknown_extension_is_written_as_png() {
        let temp_dir = tempdir().expect("temp dir");
        let path = temp_dir.path().join("out.data");

        save_image(&gradient(3, 3), &path, 90).expect("save fallback");
        let bytes = fs::read(&path).expect("read back");
        assert_eq!(image_rs::guess_format(&bytes).ok(), Some(ImageFormat::Png));
    }

    #[test]
    fn oversized_ico_is_refused_without_writing() {
        let temp_dir = tempdir().expect("temp dir");
        let path = temp_dir.path().join("big.ico");

        let result = save_image(&gradient(300, 10), &path, 90);
        assert!(matches!(result, Err(Error::Encode(_))));
        assert!(!path.exists());
    }

    #[test]
    fn small_ico_round_trips() {
        let temp_dir = tempdir().expect("temp dir");
        let path = temp_dir.path().join("small.ico");
        let image = gradient(32, 32);

        save_image(&image, &path, 90).expect("save ico");
        let reloaded = image_rs::open(&path).expect("reopen ico");
        assert_eq!(reloaded.dimensions(), (32, 32));
    }

    #[test]
    fn gif_accepts_sixteen_bit_input() {
        let temp_dir = tempdir().expect("temp dir");
        let path = temp_dir.path().join("deep.gif");
        let deep: ImageBuffer<image_rs::Rgb<u16>, Vec<u16>> =
            ImageBuffer::from_pixel(4, 4, image_rs::Rgb([60_000, 10, 500]));

        save_image(&DynamicImage::ImageRgb16(deep), &path, 90).expect("save gif");
        assert!(image_rs::open(&path).is_ok());
    }

    #[test]
    fn unwritable_target_is_io_error() {
        let temp_dir = tempdir().expect("temp dir");
        let path = temp_dir.path().join("missing-dir").join("out.png");

        assert!(matches!(
            save_image(&gradient(2, 2), &path, 90),
            Err(Error::Io(_))
        ));
    }
}
