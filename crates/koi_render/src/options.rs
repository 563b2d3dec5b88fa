//! Render switches and colors

use koi_paint::Color;
use serde::{Deserialize, Serialize};

/// Which layers to draw on top of (or instead of) the body
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Filled body outline
    pub show_silhouette: bool,
    /// Disc on every chain dot
    pub show_dots: bool,
    /// Radius of the dot discs
    pub dot_radius: f32,
    /// Size each disc by its dot's render radius instead of `dot_radius`
    pub dots_at_size: bool,
    /// Dashed link-length circle around every chain dot
    pub show_constraints: bool,
    /// Outline of every dot's render radius
    pub show_segments: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            show_silhouette: true,
            show_dots: false,
            dot_radius: 5.0,
            dots_at_size: false,
            show_constraints: false,
            show_segments: false,
        }
    }
}

impl RenderOptions {
    /// Every overlay on, body included
    pub fn debug() -> Self {
        Self {
            show_silhouette: true,
            show_dots: true,
            show_constraints: true,
            show_segments: true,
            ..Self::default()
        }
    }

    pub fn any_overlay(&self) -> bool {
        self.show_dots || self.show_constraints || self.show_segments
    }

    /// Radius of the disc drawn on a dot of render radius `size`
    pub fn dot_marker_radius(&self, size: f32) -> f32 {
        if self.dots_at_size {
            size
        } else {
            self.dot_radius
        }
    }
}

/// Fixed colors for the creature
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub body: Color,
    pub outline: Color,
    pub outline_width: f32,
    pub tail: Color,
    pub fin: Color,
    pub eye: Color,
    pub pupil: Color,
    pub overlay: Color,
}

impl Default for Palette {
    fn default() -> Self {
        let pale = Color::WHITE.with_alpha(0.82);
        Self {
            body: Color::from_hex(0x5f656e),
            outline: pale,
            outline_width: 2.0,
            tail: pale,
            fin: pale,
            eye: pale,
            pupil: Color::BLACK,
            overlay: pale,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot_markers_follow_the_dot_size_when_asked() {
        let options = RenderOptions::default();
        assert_eq!(options.dot_marker_radius(38.0), 5.0);

        let options = RenderOptions {
            dots_at_size: true,
            ..RenderOptions::default()
        };
        assert_eq!(options.dot_marker_radius(38.0), 38.0);
    }
}
