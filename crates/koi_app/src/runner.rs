//! Scenario runner for headless sessions.

use crate::animator::{Animator, Frame};
use crate::config::KoiConfig;
use crate::headless_runtime::{wait_frames, HeadlessRunConfig, HeadlessRuntime};
use crate::report::RunReport;
use crate::scenario::{Scenario, ScenarioStep};
use anyhow::{bail, Context, Result};
use koi_core::{estimate_curvature, InputEvent, Silhouette};

/// Final outcome of a scenario run.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub report: RunReport,
    /// `None` when the scenario never advanced a frame
    pub last_frame: Option<Frame>,
}

/// Counters carried across steps
#[derive(Default)]
struct RunState {
    frames: u64,
    elapsed_ms: u64,
    max_link_error: f32,
    last_frame: Option<Frame>,
}

impl RunState {
    fn advance(&mut self, animator: &mut Animator, step_ms: u64) {
        let frame = animator.frame();
        let simulation = animator.simulation();
        let error = simulation
            .chain()
            .max_link_error(simulation.config().link_length);

        self.max_link_error = self.max_link_error.max(error);
        self.frames = self.frames.saturating_add(1);
        self.elapsed_ms = self.elapsed_ms.saturating_add(step_ms);
        self.last_frame = Some(frame);
    }
}

/// Execute scenario JSON.
pub fn run_scenario_json(config: &KoiConfig, input: &str) -> Result<RunOutcome> {
    let scenario = Scenario::from_json(input)?;
    run_scenario(config, &scenario)
}

/// Execute a pre-loaded scenario.
pub fn run_scenario(config: &KoiConfig, scenario: &Scenario) -> Result<RunOutcome> {
    check_runtime(config)?;
    let tick_ms = config.run.tick_ms;
    let mut animator = Animator::new(config)?;
    let input = animator.input();
    let mut state = RunState::default();

    tracing::info!(
        steps = scenario.steps.len(),
        frames = scenario.frame_budget(tick_ms),
        "running scenario"
    );

    for (step_index, step) in scenario.steps.iter().enumerate() {
        tracing::debug!(step_index, ?step, "scenario step");
        match step {
            ScenarioStep::PointerMove { x, y } => input.pointer_moved(*x, *y),
            ScenarioStep::Resize { width, height } => {
                if *width == 0 || *height == 0 {
                    bail!("step {}: resize dimensions must be non-zero", step_index);
                }
                input.send(InputEvent::Resize {
                    width: *width,
                    height: *height,
                });
            }
            ScenarioStep::PointerPath { points } => {
                if points.is_empty() {
                    continue;
                }
                let cfg = HeadlessRunConfig {
                    max_frames: u32::try_from(points.len())
                        .with_context(|| format!("step {}: pointer path too long", step_index))?,
                    tick_ms,
                };
                HeadlessRuntime::run(cfg, |ctx| {
                    let [x, y] = points[ctx.frame_index as usize];
                    input.pointer_moved(x, y);
                    state.advance(&mut animator, tick_ms);
                    Ok(())
                })?;
            }
            ScenarioStep::Tick { frames } => {
                if *frames == 0 {
                    continue;
                }
                let cfg = HeadlessRunConfig {
                    max_frames: *frames,
                    tick_ms,
                };
                HeadlessRuntime::run(cfg, |_| {
                    state.advance(&mut animator, tick_ms);
                    Ok(())
                })?;
            }
            ScenarioStep::Wait { ms } => {
                let frames = wait_frames(*ms, tick_ms);
                if frames == 0 {
                    continue;
                }
                let mut remaining_ms = *ms;
                let cfg = HeadlessRunConfig {
                    max_frames: frames,
                    tick_ms,
                };
                HeadlessRuntime::run(cfg, |_| {
                    let step_ms = remaining_ms.min(tick_ms);
                    remaining_ms = remaining_ms.saturating_sub(step_ms);
                    state.advance(&mut animator, step_ms);
                    Ok(())
                })?;
            }
        }
    }

    let report = build_report(&animator, &state);
    tracing::info!(
        frames = report.frames,
        elapsed_ms = report.elapsed_ms,
        max_link_error = report.max_link_error,
        "scenario finished"
    );

    Ok(RunOutcome {
        report,
        last_frame: state.last_frame,
    })
}

/// Snap the target to (`x`, `y`) and advance `frames` frames, returning the
/// last one.
pub fn run_to_point(config: &KoiConfig, x: f32, y: f32, frames: u32) -> Result<Frame> {
    check_runtime(config)?;
    let mut animator = Animator::new(config)?;
    animator.input().pointer_moved(x, y);

    let mut last = None;
    let cfg = HeadlessRunConfig {
        max_frames: frames,
        tick_ms: config.run.tick_ms,
    };
    HeadlessRuntime::run(cfg, |_| {
        last = Some(animator.frame());
        Ok(())
    })?;

    last.context("no frame was rendered")
}

fn check_runtime(config: &KoiConfig) -> Result<()> {
    if config.surface.width == 0 || config.surface.height == 0 {
        bail!("surface dimensions must be non-zero");
    }
    if config.run.tick_ms == 0 {
        bail!("run tick_ms must be > 0");
    }
    Ok(())
}

fn build_report(animator: &Animator, state: &RunState) -> RunReport {
    let chain = animator.simulation().chain();
    let (curvature, silhouette_points, last_frame_commands) = match &state.last_frame {
        Some(frame) => (
            frame.geometry.curvature,
            frame.geometry.silhouette.len(),
            frame.commands.len(),
        ),
        None => (estimate_curvature(chain), Silhouette::build(chain).len(), 0),
    };

    RunReport {
        frames: state.frames,
        elapsed_ms: state.elapsed_ms,
        chain: chain.dots().to_vec(),
        curvature,
        silhouette_points,
        last_frame_commands,
        max_link_error: state.max_link_error,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use koi_core::Preset;

    #[test]
    fn pointer_move_waits_for_the_next_frame() {
        let config = KoiConfig::new(Preset::Minnow);
        let outcome = run_scenario_json(
            &config,
            r#"{"steps": [{"type": "pointer_move", "x": 900, "y": 100}]}"#,
        )
        .unwrap();

        assert_eq!(outcome.report.frames, 0);
        assert!(outcome.last_frame.is_none());
        // still collapsed on the surface centre
        assert_eq!(outcome.report.chain[0].x, 640.0);
        assert_eq!(outcome.report.silhouette_points, 14);

        let outcome = run_scenario_json(
            &config,
            r#"{"steps": [
                {"type": "pointer_move", "x": 900, "y": 100},
                {"type": "tick", "frames": 1}
            ]}"#,
        )
        .unwrap();
        assert_eq!(outcome.report.frames, 1);
        assert_eq!(outcome.report.chain[0].x, 900.0);
        assert_eq!(outcome.report.chain[0].y, 100.0);
    }

    #[test]
    fn elapsed_time_follows_the_tick() {
        let mut config = KoiConfig::new(Preset::Minnow);
        config.run.tick_ms = 10;
        let outcome = run_scenario_json(
            &config,
            r#"{"steps": [
                {"type": "pointer_path", "points": [[100, 100], [110, 100], [120, 100]]},
                {"type": "tick", "frames": 2},
                {"type": "wait", "ms": 25}
            ]}"#,
        )
        .unwrap();

        // 3 path frames + 2 ticks + 3 wait frames (10 + 10 + 5 ms)
        assert_eq!(outcome.report.frames, 8);
        assert_eq!(outcome.report.elapsed_ms, 75);
        assert_eq!(outcome.report.chain[0].x, 120.0);
    }

    #[test]
    fn resize_changes_the_cleared_area() {
        let config = KoiConfig::new(Preset::Minnow);
        let outcome = run_scenario_json(
            &config,
            r#"{"steps": [
                {"type": "resize", "width": 400, "height": 300},
                {"type": "tick", "frames": 1}
            ]}"#,
        )
        .unwrap();
        let frame = outcome.last_frame.unwrap();
        assert_eq!(frame.surface.width, 400);
        assert_eq!(frame.surface.height, 300);
        assert_eq!(outcome.report.last_frame_commands, frame.commands.len());
    }

    #[test]
    fn bad_runtime_settings_are_rejected() {
        let mut config = KoiConfig::new(Preset::Minnow);
        config.run.tick_ms = 0;
        assert!(run_scenario_json(&config, r#"{"steps": []}"#).is_err());

        let config = KoiConfig::new(Preset::Minnow);
        let zero_resize = r#"{"steps": [{"type": "resize", "width": 0, "height": 10}]}"#;
        assert!(run_scenario_json(&config, zero_resize).is_err());

        assert!(run_to_point(&config, 10.0, 10.0, 0).is_err());
    }

    #[test]
    fn run_to_point_lands_the_head_on_the_point() {
        let config = KoiConfig::new(Preset::Koi);
        let frame = run_to_point(&config, 100.0, 650.0, 4).unwrap();
        assert_eq!(frame.geometry.frame, 4);

        let svg = frame.to_svg().to_string();
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("<path"));
        assert!(svg.contains("<circle"));
    }
}
