//! Koi Render
//!
//! Draws a solved chain as a creature: fins, body silhouette, tail, eyes
//! and optional debug overlays, all recorded into a
//! [`koi_paint::PaintContext`].

pub mod body;
pub mod options;

pub use body::{fin_path, trace_outline, BodyRenderer};
pub use options::{Palette, RenderOptions};
