//! Koi App
//!
//! Ties the creature pipeline to the outside world:
//!
//! - `koi.toml` loading ([`KoiConfig`])
//! - a per-frame [`Animator`] that steps the simulation and records drawing
//! - a deterministic headless clock and JSON [`Scenario`] runner that
//!   produces a [`RunReport`]
//!
//! # Example
//!
//! ```rust
//! use koi_app::{run_scenario_json, KoiConfig};
//!
//! let outcome = run_scenario_json(
//!     &KoiConfig::default(),
//!     r#"{"steps": [{"type": "pointer_path", "points": [[100, 100], [140, 120]]}]}"#,
//! )
//! .unwrap();
//! assert_eq!(outcome.report.frames, 2);
//! assert!(outcome.report.max_link_error < 1e-3);
//! ```

pub mod animator;
pub mod config;
pub mod headless_runtime;
pub mod report;
pub mod runner;
pub mod scenario;

pub use animator::{Animator, Frame};
pub use config::{KoiConfig, RunConfig, SurfaceConfig, CONFIG_FILE};
pub use headless_runtime::{HeadlessContext, HeadlessRunConfig, HeadlessRuntime};
pub use report::RunReport;
pub use runner::{run_scenario, run_scenario_json, run_to_point, RunOutcome};
pub use scenario::{Scenario, ScenarioStep};
