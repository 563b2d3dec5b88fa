//! One creature on one surface: simulation plus renderer.

use anyhow::{Context, Result};
use koi_core::{FrameGeometry, InputEvent, InputHandle, Simulation, Surface};
use koi_paint::{PaintCommand, PaintContext, SvgDocument};
use koi_render::BodyRenderer;

use crate::config::KoiConfig;

/// Everything recorded for one frame
#[derive(Debug, Clone)]
pub struct Frame {
    pub geometry: FrameGeometry,
    /// Surface the frame was drawn on
    pub surface: Surface,
    pub commands: Vec<PaintCommand>,
}

impl Frame {
    pub fn to_svg(&self) -> SvgDocument {
        SvgDocument::from_commands(self.surface.width, self.surface.height, &self.commands)
    }
}

/// Drives the simulation and records each frame's drawing.
pub struct Animator {
    simulation: Simulation,
    renderer: BodyRenderer,
    ctx: PaintContext,
}

impl Animator {
    pub fn new(config: &KoiConfig) -> Result<Self> {
        let creature = config.creature();
        let simulation = Simulation::new(creature.clone(), config.surface.into())
            .context("Failed to create simulation")?;
        let renderer = BodyRenderer::new(creature, config.render);
        Ok(Self {
            simulation,
            renderer,
            ctx: PaintContext::new(),
        })
    }

    pub fn simulation(&self) -> &Simulation {
        &self.simulation
    }

    pub fn input(&self) -> InputHandle {
        self.simulation.input()
    }

    pub fn send(&self, event: InputEvent) {
        self.simulation.send(event);
    }

    /// Clear the surface, advance the simulation and draw the creature.
    pub fn frame(&mut self) -> Frame {
        let geometry = self.simulation.step();
        let surface = self.simulation.surface();

        self.ctx
            .clear_rect(0.0, 0.0, surface.width as f32, surface.height as f32);
        self.renderer.render(
            self.simulation.chain(),
            &geometry.silhouette,
            geometry.curvature,
            &mut self.ctx,
        );

        Frame {
            geometry,
            surface,
            commands: self.ctx.take_commands(),
        }
    }
}
