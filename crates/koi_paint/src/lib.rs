//! Koi Paint API
//!
//! A small 2D drawing vocabulary, shaped like HTML Canvas, that records
//! draw commands instead of rasterizing them.
//!
//! # Features
//!
//! - Path drawing (lines, quadratic curves, arcs)
//! - Circle primitives
//! - Fills and strokes with colors and dash patterns
//! - SVG export of a recorded frame

pub mod color;
pub mod context;
pub mod path;
pub mod primitives;
pub mod svg;

pub use color::Color;
pub use context::{FillStyle, PaintCommand, PaintContext, StrokeStyle};
pub use path::{Path, PathBuilder, PathCommand, Point};
pub use primitives::*;
pub use svg::SvgDocument;
