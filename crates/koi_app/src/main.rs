//! Koi CLI - headless runs of the pointer-following creature
//!
//! - `init`: write a starter koi.toml
//! - `run`: play a JSON scenario and report on it
//! - `frame`: render the creature after chasing a single point

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use koi_app::{run_scenario, run_to_point, KoiConfig, Scenario, CONFIG_FILE};
use koi_core::Preset;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Procedural chain-linked creature, run headlessly
#[derive(Parser)]
#[command(name = "koi")]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default configuration file
    Init {
        /// Creature preset to spell out (minnow, koi)
        #[arg(long, default_value_t = Preset::Minnow)]
        preset: Preset,

        /// Where to write the file
        #[arg(long, default_value = CONFIG_FILE)]
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Play a scenario and write a JSON report
    Run {
        /// Scenario JSON file
        #[arg(short, long)]
        scenario: PathBuf,

        /// Configuration file (defaults to ./koi.toml when present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Report output path (stdout when omitted)
        #[arg(short, long)]
        report: Option<PathBuf>,

        /// Write the last frame as SVG
        #[arg(long)]
        svg: Option<PathBuf>,
    },

    /// Chase one point for a few frames and emit the last frame as SVG
    Frame {
        #[arg(long, allow_hyphen_values = true)]
        x: f32,

        #[arg(long, allow_hyphen_values = true)]
        y: f32,

        /// Frames to advance
        #[arg(short, long, default_value_t = 1)]
        frames: u32,

        /// Configuration file (defaults to ./koi.toml when present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// SVG output path (stdout when omitted)
        #[arg(long)]
        svg: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    // Logs go to stderr so reports and SVG can be piped from stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init {
            preset,
            path,
            force,
        } => cmd_init(preset, &path, force),
        Commands::Run {
            scenario,
            config,
            report,
            svg,
        } => cmd_run(&scenario, config.as_deref(), report.as_deref(), svg.as_deref()),
        Commands::Frame {
            x,
            y,
            frames,
            config,
            svg,
        } => cmd_frame(x, y, frames, config.as_deref(), svg.as_deref()),
    }
}

fn load_config(path: Option<&Path>) -> Result<KoiConfig> {
    match path {
        Some(path) => KoiConfig::load_from_path(path),
        None if Path::new(CONFIG_FILE).exists() => {
            KoiConfig::load_from_path(Path::new(CONFIG_FILE))
        }
        None => Ok(KoiConfig::default()),
    }
}

fn cmd_init(preset: Preset, path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "{} already exists. Pass --force to overwrite it.",
            path.display()
        );
    }

    let content = KoiConfig::new(preset).to_toml()?;
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    info!("Wrote {} ({} preset)", path.display(), preset);
    Ok(())
}

fn cmd_run(
    scenario_path: &Path,
    config_path: Option<&Path>,
    report_path: Option<&Path>,
    svg_path: Option<&Path>,
) -> Result<()> {
    let config = load_config(config_path)?;
    let scenario = Scenario::from_path(scenario_path)?;
    let outcome = run_scenario(&config, &scenario)?;

    match report_path {
        Some(path) => {
            outcome.report.write_to_path(path)?;
            info!("Report written to {}", path.display());
        }
        None => outcome.report.write_to_writer(&mut std::io::stdout().lock())?,
    }

    if let Some(path) = svg_path {
        let Some(frame) = &outcome.last_frame else {
            bail!("Scenario advanced no frames; nothing to write to {}", path.display());
        };
        write_file(path, &frame.to_svg().to_string())?;
        info!("Last frame written to {}", path.display());
    }

    Ok(())
}

fn cmd_frame(
    x: f32,
    y: f32,
    frames: u32,
    config_path: Option<&Path>,
    svg_path: Option<&Path>,
) -> Result<()> {
    let config = load_config(config_path)?;
    let frame = run_to_point(&config, x, y, frames)?;
    let svg = frame.to_svg().to_string();

    match svg_path {
        Some(path) => {
            write_file(path, &svg)?;
            info!("Frame {} written to {}", frame.geometry.frame, path.display());
        }
        None => std::io::stdout().lock().write_all(svg.as_bytes())?,
    }

    Ok(())
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }
    std::fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
}
