//! The simulation context owned by the frame loop
//!
//! One frame: apply pending input, solve the chain, then build the
//! silhouette and estimate curvature from the solved chain. Nothing derived
//! is kept between frames.

use crate::chain::{Chain, Dot};
use crate::config::CreatureConfig;
use crate::curvature::estimate_curvature;
use crate::error::Result;
use crate::input::{InputEvent, InputHandle, Surface, TargetTracker};
use crate::silhouette::Silhouette;
use crate::solver::ChainSolver;

/// Per-frame geometry handed to the renderer alongside the chain
#[derive(Clone, Debug, PartialEq)]
pub struct FrameGeometry {
    /// 1-based index of the frame that produced this geometry
    pub frame: u64,
    pub silhouette: Silhouette,
    pub curvature: f32,
}

/// Chain, target and surface state for one creature
pub struct Simulation {
    config: CreatureConfig,
    solver: ChainSolver,
    chain: Chain,
    tracker: TargetTracker,
    surface: Surface,
    input: InputHandle,
    frame: u64,
}

impl Simulation {
    /// Build a creature collapsed onto the centre of `surface`.
    ///
    /// # Errors
    ///
    /// Fails when `config` does not validate.
    pub fn new(config: CreatureConfig, surface: Surface) -> Result<Self> {
        config.validate()?;

        let origin = surface.center();
        let chain = Chain::collapsed(origin, config.head_size, &config.body_sizes)?;
        let tracker = TargetTracker::new(Dot::at(origin, config.head_size));

        tracing::debug!(
            dots = chain.len(),
            link_length = config.link_length,
            width = surface.width,
            height = surface.height,
            "simulation created"
        );

        Ok(Self {
            solver: ChainSolver::new(config.link_length),
            config,
            chain,
            tracker,
            surface,
            input: InputHandle::new(),
            frame: 0,
        })
    }

    /// A sender for pointer and resize notifications
    pub fn input(&self) -> InputHandle {
        self.input.clone()
    }

    /// Queue an event for the next frame
    pub fn send(&self, event: InputEvent) {
        self.input.send(event);
    }

    pub fn config(&self) -> &CreatureConfig {
        &self.config
    }

    pub fn chain(&self) -> &Chain {
        &self.chain
    }

    pub fn surface(&self) -> Surface {
        self.surface
    }

    pub fn target(&self) -> Dot {
        self.tracker.target()
    }

    /// Frames stepped so far
    pub fn frame_count(&self) -> u64 {
        self.frame
    }

    /// Advance one frame.
    pub fn step(&mut self) -> FrameGeometry {
        let pending = self.input.take();
        if let Some(surface) = pending.surface {
            if surface != self.surface {
                tracing::debug!(
                    width = surface.width,
                    height = surface.height,
                    "surface resized"
                );
            }
            self.surface = surface;
        }
        if let Some(pointer) = pending.pointer {
            self.tracker.pointer_moved(pointer.x, pointer.y);
        }

        self.solver.solve(&mut self.chain, self.tracker.target());

        let silhouette = Silhouette::build(&self.chain);
        let curvature = estimate_curvature(&self.chain);
        self.frame += 1;

        tracing::trace!(frame = self.frame, curvature, "frame solved");

        FrameGeometry {
            frame: self.frame,
            silhouette,
            curvature,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::KoiError;
    use koi_paint::Point;

    #[test]
    fn starts_collapsed_on_the_surface_centre() {
        let sim = Simulation::new(CreatureConfig::minnow(), Surface::new(800, 600)).unwrap();
        assert!(sim.chain().positions().all(|p| p == Point::new(400.0, 300.0)));
        assert_eq!(sim.target(), Dot::new(400.0, 300.0, 35.0));
        assert_eq!(sim.frame_count(), 0);
    }

    #[test]
    fn rejects_invalid_config() {
        let config = CreatureConfig {
            body_sizes: vec![],
            ..CreatureConfig::minnow()
        };
        assert!(matches!(
            Simulation::new(config, Surface::default()),
            Err(KoiError::TooShort { .. })
        ));
    }

    #[test]
    fn pointer_applies_on_the_next_step() {
        let mut sim = Simulation::new(CreatureConfig::minnow(), Surface::new(800, 600)).unwrap();
        sim.input().pointer_moved(500.0, 300.0);

        // queued input does not move anything until the frame runs
        assert_eq!(sim.chain().head().position(), Point::new(400.0, 300.0));

        let geometry = sim.step();
        assert_eq!(geometry.frame, 1);
        assert_eq!(*sim.chain().head(), Dot::new(500.0, 300.0, 35.0));
        assert!(sim.chain().max_link_error(32.0) < 1e-3);
        assert_eq!(geometry.silhouette.len(), 2 * sim.chain().len() + 2);
    }

    #[test]
    fn resize_leaves_the_chain_alone() {
        let mut sim = Simulation::new(CreatureConfig::minnow(), Surface::new(800, 600)).unwrap();
        sim.send(InputEvent::PointerMove { x: 450.0, y: 320.0 });
        sim.step();
        let before = sim.chain().clone();

        sim.send(InputEvent::Resize {
            width: 1920,
            height: 1080,
        });
        sim.step();

        assert_eq!(sim.surface(), Surface::new(1920, 1080));
        assert_eq!(sim.chain().len(), before.len());
        for (after, before) in sim.chain().positions().zip(before.positions()) {
            assert!(after.distance(before) < 1e-3);
        }
    }

    #[test]
    fn garbage_pointer_does_not_cancel_a_valid_move() {
        let mut sim = Simulation::new(CreatureConfig::minnow(), Surface::new(800, 600)).unwrap();
        let input = sim.input();
        input.pointer_moved(500.0, 300.0);
        input.pointer_moved(f32::NAN, 10.0);
        sim.step();

        assert_eq!(sim.chain().head().position(), Point::new(500.0, 300.0));
    }

    #[test]
    fn geometry_is_rebuilt_every_frame() {
        let mut sim = Simulation::new(CreatureConfig::koi(), Surface::new(800, 600)).unwrap();
        sim.input().pointer_moved(600.0, 300.0);
        let first = sim.step();
        sim.input().pointer_moved(600.0, 500.0);
        let second = sim.step();

        assert_eq!(second.frame, 2);
        assert_ne!(first.silhouette, second.silhouette);
        assert!(second.curvature.is_finite());
    }
}
