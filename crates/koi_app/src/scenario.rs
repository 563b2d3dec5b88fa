//! Scripted input for headless runs.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Sequence of scripted steps.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Scenario {
    pub steps: Vec<ScenarioStep>,
}

impl Scenario {
    /// Load a scenario from JSON text.
    pub fn from_json(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    /// Load a scenario from file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_json(&raw).with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Frames the scenario advances at `tick_ms`
    pub fn frame_budget(&self, tick_ms: u64) -> u64 {
        self.steps
            .iter()
            .map(|step| match step {
                ScenarioStep::PointerPath { points } => points.len() as u64,
                ScenarioStep::Tick { frames } => *frames as u64,
                ScenarioStep::Wait { ms } => {
                    crate::headless_runtime::wait_frames(*ms, tick_ms) as u64
                }
                ScenarioStep::PointerMove { .. } | ScenarioStep::Resize { .. } => 0,
            })
            .sum()
    }
}

/// One scripted step.
///
/// `pointer_move` and `resize` only queue input for the next frame;
/// `pointer_path` runs one frame per point.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScenarioStep {
    PointerMove { x: f32, y: f32 },
    PointerPath { points: Vec<[f32; 2]> },
    Resize { width: u32, height: u32 },
    Tick { frames: u32 },
    Wait { ms: u64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_step_kind() {
        let scenario = Scenario::from_json(
            r#"{"steps": [
                {"type": "pointer_move", "x": 10.0, "y": 20.0},
                {"type": "pointer_path", "points": [[0, 0], [5.5, 1]]},
                {"type": "resize", "width": 640, "height": 480},
                {"type": "tick", "frames": 3},
                {"type": "wait", "ms": 40}
            ]}"#,
        )
        .unwrap();

        assert_eq!(
            scenario.steps,
            vec![
                ScenarioStep::PointerMove { x: 10.0, y: 20.0 },
                ScenarioStep::PointerPath {
                    points: vec![[0.0, 0.0], [5.5, 1.0]],
                },
                ScenarioStep::Resize {
                    width: 640,
                    height: 480,
                },
                ScenarioStep::Tick { frames: 3 },
                ScenarioStep::Wait { ms: 40 },
            ]
        );
        // 2 path frames + 3 ticks + ceil(40 / 16)
        assert_eq!(scenario.frame_budget(16), 8);
    }

    #[test]
    fn unknown_step_is_an_error() {
        assert!(Scenario::from_json(r#"{"steps": [{"type": "teleport"}]}"#).is_err());
        assert!(Scenario::from_json(r#"{"steps": [{"type": "tick"}]}"#).is_err());
    }
}
