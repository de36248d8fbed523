// SPDX-License-Identifier: MPL-2.0
//! Facts about the current image shown on the details screen.

use crate::media::ImageData;
use chrono::{DateTime, Local};
use image_rs::{ColorType, ImageFormat};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq)]
pub struct ImageDetails {
    pub file_name: String,
    pub path: PathBuf,
    /// Container name such as "PNG", or "SVG" for rasterized vector files.
    pub format: String,
    pub width: u32,
    pub height: u32,
    pub color_mode: String,
    /// `None` when the file vanished after loading.
    pub file_size: Option<u64>,
    pub modified: Option<DateTime<Local>>,
}

impl ImageDetails {
    /// Collects details for `image`, which was decoded from `path`.
    ///
    /// Dimensions describe the displayed buffer, so they follow rotations.
    pub fn collect(path: &Path, image: &ImageData) -> Self {
        let metadata = fs::metadata(path).ok();

        Self {
            file_name: path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default(),
            path: path.to_path_buf(),
            format: format_label(image.format),
            width: image.width,
            height: image.height,
            color_mode: color_mode_label(image.buffer().color()),
            file_size: metadata.as_ref().map(fs::Metadata::len),
            modified: metadata
                .and_then(|m| m.modified().ok())
                .map(DateTime::<Local>::from),
        }
    }

    pub fn dimensions_label(&self) -> String {
        format!("{} × {}", self.width, self.height)
    }

    pub fn modified_label(&self) -> Option<String> {
        self.modified
            .map(|time| time.format("%Y-%m-%d %H:%M:%S").to_string())
    }
}

fn format_label(format: Option<ImageFormat>) -> String {
    match format {
        Some(format) => format
            .extensions_str()
            .first()
            .map(|ext| ext.to_ascii_uppercase())
            .unwrap_or_else(|| format!("{format:?}").to_ascii_uppercase()),
        None => "SVG".to_string(),
    }
}

/// Channel layout and depth, e.g. "RGBA, 8-bit".
pub fn color_mode_label(color: ColorType) -> String {
    let channels = match color {
        ColorType::L8 | ColorType::L16 => "Grayscale",
        ColorType::La8 | ColorType::La16 => "Grayscale + Alpha",
        ColorType::Rgb8 | ColorType::Rgb16 | ColorType::Rgb32F => "RGB",
        ColorType::Rgba8 | ColorType::Rgba16 | ColorType::Rgba32F => "RGBA",
        _ => "Unknown",
    };
    let bits_per_channel = u16::from(color.bits_per_pixel()) / u16::from(color.channel_count());
    let depth = if matches!(color, ColorType::Rgb32F | ColorType::Rgba32F) {
        "32-bit float".to_string()
    } else {
        format!("{bits_per_channel}-bit")
    };
    format!("{channels}, {depth}")
}

/// Human-readable size using binary units.
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["KiB", "MiB", "GiB", "TiB"];

    if bytes < 1024 {
        return format!("{bytes} B");
    }
    let mut value = bytes as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{value:.1} {}", UNITS[unit])
}
