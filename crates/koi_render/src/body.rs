//! Creature drawing
//!
//! Draw order: fins, body, tail, eyes, then any debug overlays. Fins go
//! first so the body covers their roots.

use std::f32::consts::TAU;

use koi_core::{Chain, CreatureConfig, EdgeSegment, Eyes, Fin, Point, Silhouette, Tail};
use koi_paint::{PaintContext, Path, PathBuilder, StrokeStyle};

use crate::options::{Palette, RenderOptions};

const CONSTRAINT_DASH: [f32; 2] = [5.0, 15.0];

/// Turns solved chain geometry into paint commands
#[derive(Clone, Debug)]
pub struct BodyRenderer {
    creature: CreatureConfig,
    options: RenderOptions,
    palette: Palette,
}

impl BodyRenderer {
    pub fn new(creature: CreatureConfig, options: RenderOptions) -> Self {
        Self {
            creature,
            options,
            palette: Palette::default(),
        }
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: RenderOptions) {
        self.options = options;
    }

    /// Record the whole creature for one frame.
    pub fn render(
        &self,
        chain: &Chain,
        silhouette: &Silhouette,
        curvature: f32,
        ctx: &mut PaintContext,
    ) {
        let before = ctx.commands().len();

        self.draw_fins(chain, ctx);
        if self.options.show_silhouette {
            self.draw_body(silhouette, ctx);
        }
        self.draw_tail(chain, curvature, ctx);
        self.draw_eyes(chain, ctx);
        if self.options.any_overlay() {
            self.draw_overlays(chain, ctx);
        }

        tracing::trace!(
            commands = ctx.commands().len() - before,
            "creature rendered"
        );
    }

    fn outline_stroke(&self) -> StrokeStyle {
        StrokeStyle::solid(self.palette.outline, self.palette.outline_width)
    }

    fn draw_body(&self, silhouette: &Silhouette, ctx: &mut PaintContext) {
        let Some(nose) = silhouette.nose() else {
            return;
        };
        let path = trace_outline(nose, &silhouette.outline()).build();
        ctx.fill_and_stroke_path(path, self.palette.body, self.outline_stroke());
    }

    fn draw_tail(&self, chain: &Chain, curvature: f32, ctx: &mut PaintContext) {
        let tail = Tail::build(chain, curvature, self.creature.tail_offset);
        let path = tail
            .inner
            .iter()
            .fold(trace_outline(tail.start, &tail.outer), |builder, p| {
                builder.line_to(p.x, p.y)
            })
            .build();
        ctx.fill_and_stroke_path(path, self.palette.tail, self.outline_stroke());
    }

    fn draw_fins(&self, chain: &Chain, ctx: &mut PaintContext) {
        for config in &self.creature.fins {
            let Some(fin) = Fin::at(chain, config.anchor, config.size) else {
                continue;
            };
            ctx.fill_path(fin_path(&fin), self.palette.fin);
        }
    }

    fn draw_eyes(&self, chain: &Chain, ctx: &mut PaintContext) {
        let eyes = Eyes::locate(chain, self.creature.eye_spacing);
        for eye in eyes.iter() {
            ctx.fill_circle(eye.x, eye.y, self.creature.eye_size, self.palette.eye);
            if let Some(pupil) = self.creature.pupil_size {
                ctx.fill_circle(eye.x, eye.y, pupil, self.palette.pupil);
            }
        }
    }

    fn draw_overlays(&self, chain: &Chain, ctx: &mut PaintContext) {
        for dot in chain.dots() {
            if self.options.show_dots {
                ctx.fill_path(
                    circle_path(dot.position(), self.options.dot_marker_radius(dot.size)),
                    self.palette.overlay,
                );
            }
            if self.options.show_constraints {
                ctx.stroke_path(
                    circle_path(dot.position(), self.creature.link_length),
                    StrokeStyle::dashed(self.palette.overlay, 1.0, &CONSTRAINT_DASH),
                );
            }
            if self.options.show_segments {
                ctx.stroke_circle(
                    dot.x,
                    dot.y,
                    dot.size,
                    StrokeStyle::solid(self.palette.overlay, 1.0),
                );
            }
        }
    }
}

/// Start a path at `start` and follow the smoothed segments
pub fn trace_outline(start: Point, segments: &[EdgeSegment]) -> PathBuilder {
    let builder = PathBuilder::new().move_to(start.x, start.y);
    segments
        .iter()
        .fold(builder, |builder, segment| match *segment {
            EdgeSegment::Curve { control, end } => {
                builder.quad_to(control.x, control.y, end.x, end.y)
            }
            EdgeSegment::Line(end) => builder.line_to(end.x, end.y),
        })
}

/// Closed petal starting and ending on the fin's anchor
pub fn fin_path(fin: &Fin) -> Path {
    trace_outline(fin.anchor, &fin.petal()).build()
}

fn circle_path(center: Point, radius: f32) -> Path {
    PathBuilder::new()
        .arc_to(center.x, center.y, radius, 0.0, TAU)
        .build()
}
