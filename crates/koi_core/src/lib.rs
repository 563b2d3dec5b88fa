//! Koi Core
//!
//! The geometry pipeline behind a chain-linked creature that chases the
//! pointer:
//!
//! - **Chain solver**: drags a fixed-link-length chain behind its head
//! - **Curvature**: one signed turning value for the whole chain
//! - **Silhouette**: a closed, single-path outline around the chain
//! - **Features**: eye, fin and tail anchors derived from the chain
//! - **Simulation**: the per-frame context that ties them together
//!
//! # Example
//!
//! ```rust
//! use koi_core::{CreatureConfig, Simulation, Surface};
//!
//! let mut sim = Simulation::new(CreatureConfig::minnow(), Surface::new(800, 600)).unwrap();
//! sim.input().pointer_moved(600.0, 300.0);
//!
//! let geometry = sim.step();
//! assert_eq!(sim.chain().head().x, 600.0);
//! assert_eq!(geometry.silhouette.len(), 2 * sim.chain().len() + 2);
//! ```

pub mod chain;
pub mod config;
pub mod curvature;
pub mod error;
pub mod features;
pub mod geometry;
pub mod input;
pub mod silhouette;
pub mod simulation;
pub mod solver;

pub use chain::{Chain, Dot, MIN_CHAIN_LEN};
pub use config::{CreatureConfig, FinConfig, Preset};
pub use curvature::estimate_curvature;
pub use error::{KoiError, Result};
pub use features::{Eyes, Fin, Tail, FIN_REACH};
pub use geometry::{heading, EdgeSegment};
pub use input::{InputEvent, InputHandle, PendingInput, Surface, TargetTracker};
pub use silhouette::Silhouette;
pub use simulation::{FrameGeometry, Simulation};
pub use solver::ChainSolver;

pub use koi_paint::Point;
