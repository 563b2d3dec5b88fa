//! Paint context - the main drawing API

use smallvec::SmallVec;

use crate::color::Color;
use crate::path::{Path, Point};
use crate::primitives::*;

/// Fill style for shapes
#[derive(Clone, Debug, PartialEq)]
pub enum FillStyle {
    Color(Color),
}

impl From<Color> for FillStyle {
    fn from(color: Color) -> Self {
        FillStyle::Color(color)
    }
}

/// Stroke style
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    pub color: Color,
    pub width: f32,
    /// Alternating dash/gap lengths; empty draws a solid line
    pub dash: SmallVec<[f32; 4]>,
}

impl StrokeStyle {
    pub fn solid(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            ..Default::default()
        }
    }

    pub fn dashed(color: Color, width: f32, dash: &[f32]) -> Self {
        Self {
            color,
            width,
            dash: SmallVec::from_slice(dash),
            ..Default::default()
        }
    }

    pub fn is_dashed(&self) -> bool {
        !self.dash.is_empty()
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: 1.0,
            dash: SmallVec::new(),
        }
    }
}

/// A paint command for the renderer
#[derive(Clone, Debug, PartialEq)]
pub enum PaintCommand {
    /// Erase everything inside `rect`
    ClearRect {
        rect: Rect,
    },
    FillCircle {
        circle: Circle,
        style: FillStyle,
    },
    StrokeCircle {
        circle: Circle,
        style: StrokeStyle,
    },
    FillPath {
        path: Path,
        style: FillStyle,
    },
    StrokePath {
        path: Path,
        style: StrokeStyle,
    },
}

/// The paint context used for custom drawing
pub struct PaintContext {
    commands: Vec<PaintCommand>,
}

impl PaintContext {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Get all recorded commands
    pub fn commands(&self) -> &[PaintCommand] {
        &self.commands
    }

    /// Take ownership of recorded commands
    pub fn take_commands(&mut self) -> Vec<PaintCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.commands.push(PaintCommand::ClearRect {
            rect: Rect::new(x, y, width, height),
        });
    }

    // === Shape drawing ===

    pub fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, style: impl Into<FillStyle>) {
        self.commands.push(PaintCommand::FillCircle {
            circle: Circle::new(Point::new(cx, cy), radius),
            style: style.into(),
        });
    }

    pub fn stroke_circle(&mut self, cx: f32, cy: f32, radius: f32, style: StrokeStyle) {
        self.commands.push(PaintCommand::StrokeCircle {
            circle: Circle::new(Point::new(cx, cy), radius),
            style,
        });
    }

    // === Path drawing ===

    pub fn fill_path(&mut self, path: Path, style: impl Into<FillStyle>) {
        self.commands.push(PaintCommand::FillPath {
            path,
            style: style.into(),
        });
    }

    pub fn stroke_path(&mut self, path: Path, style: StrokeStyle) {
        self.commands.push(PaintCommand::StrokePath { path, style });
    }

    /// Fill then stroke the same path, the canvas `fill(); stroke();` idiom
    pub fn fill_and_stroke_path(
        &mut self,
        path: Path,
        fill: impl Into<FillStyle>,
        stroke: StrokeStyle,
    ) {
        self.fill_path(path.clone(), fill);
        self.stroke_path(path, stroke);
    }
}

impl Default for PaintContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::PathBuilder;

    #[test]
    fn records_commands_in_call_order() {
        let mut ctx = PaintContext::new();
        ctx.clear_rect(0.0, 0.0, 100.0, 100.0);
        ctx.fill_circle(10.0, 10.0, 5.0, Color::WHITE);

        let path = PathBuilder::new().move_to(0.0, 0.0).line_to(10.0, 0.0).build();
        ctx.fill_and_stroke_path(path.clone(), Color::BLACK, StrokeStyle::solid(Color::WHITE, 2.0));

        let commands = ctx.take_commands();
        assert_eq!(commands.len(), 4);
        assert!(matches!(commands[0], PaintCommand::ClearRect { .. }));
        assert!(matches!(commands[1], PaintCommand::FillCircle { .. }));
        assert_eq!(
            commands[2],
            PaintCommand::FillPath {
                path: path.clone(),
                style: FillStyle::Color(Color::BLACK),
            }
        );
        assert!(matches!(
            &commands[3],
            PaintCommand::StrokePath { style, .. } if style.width == 2.0
        ));
        assert!(ctx.commands().is_empty());
    }

    #[test]
    fn dashed_stroke_keeps_pattern() {
        let style = StrokeStyle::dashed(Color::WHITE, 1.0, &[5.0, 15.0]);
        assert!(style.is_dashed());
        assert_eq!(style.dash.as_slice(), &[5.0, 15.0]);
        assert!(!StrokeStyle::default().is_dashed());
    }
}
