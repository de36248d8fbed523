// SPDX-License-Identifier: MPL-2.0
//! Quarter-turn rotations and mirrors applied to the decoded buffer.

use crate::media::ImageData;
use image_rs::DynamicImage;

/// A reversible transform bound to an Edit menu entry and a shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transform {
    RotateClockwise,
    RotateCounterClockwise,
    FlipHorizontal,
    FlipVertical,
}

impl Transform {
    pub const ALL: [Transform; 4] = [
        Transform::RotateClockwise,
        Transform::RotateCounterClockwise,
        Transform::FlipVertical,
        Transform::FlipHorizontal,
    ];

    /// i18n key of the menu label.
    pub fn label_key(self) -> &'static str {
        match self {
            Transform::RotateClockwise => "menu-edit-rotate-cw",
            Transform::RotateCounterClockwise => "menu-edit-rotate-ccw",
            Transform::FlipHorizontal => "menu-edit-flip-horizontal",
            Transform::FlipVertical => "menu-edit-flip-vertical",
        }
    }

    /// Applies the transform to a decoded buffer.
    #[must_use]
    pub fn apply(self, image: &DynamicImage) -> DynamicImage {
        match self {
            Transform::RotateClockwise => rotate_right(image),
            Transform::RotateCounterClockwise => rotate_left(image),
            Transform::FlipHorizontal => flip_horizontal(image),
            Transform::FlipVertical => flip_vertical(image),
        }
    }

    /// Applies the transform and rebuilds the display handle.
    #[must_use]
    pub fn apply_to(self, data: &ImageData) -> ImageData {
        ImageData::from_dynamic(self.apply(data.buffer()), data.format)
    }
}

/// Rotate an image 90 degrees counter-clockwise (left).
pub fn rotate_left(image: &DynamicImage) -> DynamicImage {
    image.rotate270()
}

/// Rotate an image 90 degrees clockwise (right).
pub fn rotate_right(image: &DynamicImage) -> DynamicImage {
    image.rotate90()
}

/// Mirror left-to-right.
pub fn flip_horizontal(image: &DynamicImage) -> DynamicImage {
    image.fliph()
}

/// Mirror top-to-bottom.
pub fn flip_vertical(image: &DynamicImage) -> DynamicImage {
    image.flipv()
}
