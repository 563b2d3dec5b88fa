//! SVG export of recorded paint commands
//!
//! SVG has no erase operation, so a `ClearRect` discards every element
//! recorded before it. Frames start with a full-surface clear, so the
//! document ends up holding the last frame only.

use std::f32::consts::{PI, TAU};
use std::fmt;
use std::fmt::Write as _;

use crate::color::trim_float;
use crate::context::{FillStyle, PaintCommand, StrokeStyle};
use crate::path::{Path, PathCommand, Point};

/// An SVG document built from a command list
#[derive(Clone, Debug)]
pub struct SvgDocument {
    width: u32,
    height: u32,
    elements: Vec<String>,
}

impl SvgDocument {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            elements: Vec::new(),
        }
    }

    pub fn from_commands(width: u32, height: u32, commands: &[PaintCommand]) -> Self {
        let mut doc = Self::new(width, height);
        doc.extend(commands);
        doc
    }

    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    pub fn extend(&mut self, commands: &[PaintCommand]) {
        for command in commands {
            self.push(command);
        }
        tracing::trace!(elements = self.elements.len(), "svg document updated");
    }

    pub fn push(&mut self, command: &PaintCommand) {
        match command {
            PaintCommand::ClearRect { .. } => self.elements.clear(),
            PaintCommand::FillCircle { circle, style } => self.elements.push(format!(
                r#"<circle cx="{}" cy="{}" r="{}" {} stroke="none"/>"#,
                num(circle.center.x),
                num(circle.center.y),
                num(circle.radius),
                fill_attrs(style),
            )),
            PaintCommand::StrokeCircle { circle, style } => self.elements.push(format!(
                r#"<circle cx="{}" cy="{}" r="{}" fill="none" {}/>"#,
                num(circle.center.x),
                num(circle.center.y),
                num(circle.radius),
                stroke_attrs(style),
            )),
            PaintCommand::FillPath { path, style } => {
                if !path.is_empty() {
                    self.elements.push(format!(
                        r#"<path d="{}" {} stroke="none"/>"#,
                        path_data(path),
                        fill_attrs(style),
                    ));
                }
            }
            PaintCommand::StrokePath { path, style } => {
                if !path.is_empty() {
                    self.elements.push(format!(
                        r#"<path d="{}" fill="none" {}/>"#,
                        path_data(path),
                        stroke_attrs(style),
                    ));
                }
            }
        }
    }
}

impl fmt::Display for SvgDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = self.width,
            h = self.height,
        )?;
        for element in &self.elements {
            writeln!(f, "  {}", element)?;
        }
        writeln!(f, "</svg>")
    }
}

/// Serialize a path into SVG path data
pub fn path_data(path: &Path) -> String {
    let mut d = String::new();
    let mut current: Option<Point> = None;

    for command in path.commands() {
        if !d.is_empty() {
            d.push(' ');
        }
        match *command {
            PathCommand::MoveTo(p) => {
                let _ = write!(d, "M {} {}", num(p.x), num(p.y));
                current = Some(p);
            }
            PathCommand::LineTo(p) => {
                let _ = write!(d, "L {} {}", num(p.x), num(p.y));
                current = Some(p);
            }
            PathCommand::QuadTo { control, end } => {
                let _ = write!(
                    d,
                    "Q {} {} {} {}",
                    num(control.x),
                    num(control.y),
                    num(end.x),
                    num(end.y)
                );
                current = Some(end);
            }
            PathCommand::ArcTo {
                center,
                radius,
                start_angle,
                end_angle,
            } => {
                let start = center.offset(start_angle, radius);
                let lead = if current.is_some() { "L" } else { "M" };
                let _ = write!(d, "{} {} {}", lead, num(start.x), num(start.y));

                let sweep = end_angle - start_angle;
                let sweep_flag = if sweep >= 0.0 { 1 } else { 0 };
                if sweep.abs() >= TAU - 1e-4 {
                    // A single SVG arc cannot describe a full turn
                    let half = start_angle + PI * sweep.signum();
                    let mid = center.offset(half, radius);
                    let _ = write!(
                        d,
                        " A {r} {r} 0 0 {s} {} {} A {r} {r} 0 0 {s} {} {}",
                        num(mid.x),
                        num(mid.y),
                        num(start.x),
                        num(start.y),
                        r = num(radius),
                        s = sweep_flag,
                    );
                    current = Some(start);
                } else {
                    let end = center.offset(end_angle, radius);
                    let large_arc = if sweep.abs() > PI { 1 } else { 0 };
                    let _ = write!(
                        d,
                        " A {r} {r} 0 {} {} {} {}",
                        large_arc,
                        sweep_flag,
                        num(end.x),
                        num(end.y),
                        r = num(radius),
                    );
                    current = Some(end);
                }
            }
        }
    }

    d
}

fn fill_attrs(style: &FillStyle) -> String {
    match style {
        FillStyle::Color(color) => format!(r#"fill="{}""#, color.to_css()),
    }
}

fn stroke_attrs(style: &StrokeStyle) -> String {
    let mut attrs = format!(
        r#"stroke="{}" stroke-width="{}""#,
        style.color.to_css(),
        num(style.width),
    );
    if style.is_dashed() {
        let pattern: Vec<String> = style.dash.iter().map(|v| num(*v)).collect();
        let _ = write!(attrs, r#" stroke-dasharray="{}""#, pattern.join(" "));
    }
    attrs
}

fn num(value: f32) -> String {
    trim_float(value)
}
