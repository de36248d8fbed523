// SPDX-License-Identifier: MPL-2.0
//! Accumulated orientation of the displayed buffer relative to the file on disk.
//!
//! Quarter turns and mirrors form the dihedral group of order 8, so any
//! sequence of transforms collapses to at most one mirror followed by up to
//! three clockwise quarter turns. The viewer uses this to decide whether the
//! buffer differs from the file, which drives the `*` in the window title.

use super::image_transform::Transform;

/// `quarter_turns` clockwise rotations applied after an optional horizontal mirror.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Orientation {
    quarter_turns: u8,
    mirrored: bool,
}

impl Orientation {
    pub const IDENTITY: Orientation = Orientation {
        quarter_turns: 0,
        mirrored: false,
    };

    pub fn is_identity(self) -> bool {
        self == Self::IDENTITY
    }

    /// Orientation after applying `transform` on top of `self`.
    #[must_use]
    pub fn then(self, transform: Transform) -> Self {
        let r = self.quarter_turns;
        let (quarter_turns, mirrored) = match transform {
            Transform::RotateClockwise => ((r + 1) % 4, self.mirrored),
            Transform::RotateCounterClockwise => ((r + 3) % 4, self.mirrored),
            // H.R^r = R^-r.H
            Transform::FlipHorizontal => ((4 - r) % 4, !self.mirrored),
            // V = R^2.H
            Transform::FlipVertical => ((6 - r) % 4, !self.mirrored),
        };
        Self {
            quarter_turns,
            mirrored,
        }
    }
}

impl FromIterator<Transform> for Orientation {
    fn from_iter<I: IntoIterator<Item = Transform>>(iter: I) -> Self {
        iter.into_iter().fold(Self::IDENTITY, Orientation::then)
    }
}
