//! Report output model for headless runs.

use anyhow::{Context, Result};
use koi_core::Dot;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::Path;

/// Machine-readable result of a headless run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    /// Frames stepped by the run
    pub frames: u64,
    pub elapsed_ms: u64,
    /// Chain after the last frame, head first
    pub chain: Vec<Dot>,
    pub curvature: f32,
    pub silhouette_points: usize,
    /// Paint commands recorded for the last frame, the clear included
    pub last_frame_commands: usize,
    /// Largest distance from the link length seen on any frame
    pub max_link_error: f32,
}

impl RunReport {
    pub fn write_to_path(&self, path: &Path) -> Result<()> {
        let payload = serde_json::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
        }
        std::fs::write(path, payload)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }

    pub fn write_to_writer<W: Write>(&self, writer: &mut W) -> Result<()> {
        let payload = serde_json::to_string_pretty(self)?;
        writer.write_all(payload.as_bytes())?;
        writer.write_all(b"\n")?;
        Ok(())
    }
}
