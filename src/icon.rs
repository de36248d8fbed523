// SPDX-License-Identifier: MPL-2.0
//! Window icon rasterized from the embedded branding SVG.

use crate::media::image::render_svg;
use iced::window::{icon, Icon};
use resvg::usvg;

const ICON_SIZE: u32 = 128;

const SVG_SOURCE: &str = include_str!("../assets/branding/glimpse.svg");

/// Returns `None` if the SVG cannot be parsed or rendered.
pub fn load_window_icon() -> Option<Icon> {
    let tree = usvg::Tree::from_data(SVG_SOURCE.as_bytes(), &usvg::Options::default()).ok()?;
    let pixels = render_svg(&tree, ICON_SIZE, ICON_SIZE).ok()?;
    icon::from_rgba(pixels.into_raw(), ICON_SIZE, ICON_SIZE).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_icon_renders() {
        assert!(load_window_icon().is_some());
    }
}
