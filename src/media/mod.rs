// SPDX-License-Identifier: MPL-2.0
//! Image decoding, transforms, orientation tracking, saving and folder navigation.

pub mod details;
pub mod export;
pub mod image;
pub mod image_transform;
pub mod navigator;
pub mod orientation;
pub mod skip_attempts;

use std::path::Path;

pub use details::ImageDetails;
pub use export::save_image;
pub use extensions::IMAGE_EXTENSIONS;
pub use image::{load_image, ImageData};
pub use image_transform::Transform;
pub use navigator::ImageNavigator;
pub use orientation::Orientation;
pub use skip_attempts::MaxSkipAttempts;

/// File extensions understood by the viewer.
pub mod extensions {
    /// Extensions shown in the folder listing and the open dialog.
    pub const IMAGE_EXTENSIONS: &[&str] = &[
        "jpg", "jpeg", "png", "bmp", "gif", "ico", "tif", "tiff", "webp", "svg",
    ];

    /// Filters offered by the save dialog, in display order.
    pub const IMAGE_SAVE_FILTERS: &[(&str, &[&str])] = &[
        ("PNG", &["png"]),
        ("JPEG", &["jpg", "jpeg"]),
        ("BMP", &["bmp"]),
        ("GIF", &["gif"]),
        ("ICO", &["ico"]),
        ("TIFF", &["tiff", "tif"]),
        ("WebP", &["webp"]),
    ];
}

/// Returns `true` when the path carries one of [`IMAGE_EXTENSIONS`], ignoring case.
#[must_use]
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}
