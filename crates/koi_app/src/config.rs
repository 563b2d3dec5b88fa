//! Koi configuration file handling

use anyhow::{Context, Result};
use koi_core::{CreatureConfig, Preset, Surface};
use koi_render::RenderOptions;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default file name looked up by the CLI
pub const CONFIG_FILE: &str = "koi.toml";

/// Top-level Koi configuration (koi.toml)
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct KoiConfig {
    /// Creature used when no `[creature]` table is present
    #[serde(default)]
    pub preset: Preset,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creature: Option<CreatureConfig>,
    #[serde(default)]
    pub render: RenderOptions,
    #[serde(default)]
    pub surface: SurfaceConfig,
    #[serde(default)]
    pub run: RunConfig,
}

/// Initial drawing surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct SurfaceConfig {
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
}

fn default_width() -> u32 {
    1280
}

fn default_height() -> u32 {
    720
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
        }
    }
}

impl From<SurfaceConfig> for Surface {
    fn from(config: SurfaceConfig) -> Self {
        Surface::new(config.width, config.height)
    }
}

/// Frame loop timing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct RunConfig {
    /// Logical milliseconds between frames
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
}

fn default_tick_ms() -> u64 {
    16
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
        }
    }
}

impl Default for KoiConfig {
    fn default() -> Self {
        Self::new(Preset::default())
    }
}

impl KoiConfig {
    /// Load configuration from a file, or from `koi.toml` inside a directory
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let config_path = if path.is_dir() {
            path.join(CONFIG_FILE)
        } else {
            path.to_path_buf()
        };

        if !config_path.exists() {
            anyhow::bail!(
                "No config found at {}. Run `koi init` to create one.",
                config_path.display()
            );
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse {}", config_path.display()))
    }

    /// Parse and validate TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: KoiConfig = toml::from_str(content)?;
        config
            .creature()
            .validate()
            .context("Invalid [creature] section")?;
        Ok(config)
    }

    /// Create a configuration with the creature spelled out from `preset`
    pub fn new(preset: Preset) -> Self {
        Self {
            preset,
            creature: Some(preset.config()),
            render: RenderOptions::default(),
            surface: SurfaceConfig::default(),
            run: RunConfig::default(),
        }
    }

    /// The explicit creature, falling back to the preset
    pub fn creature(&self) -> CreatureConfig {
        self.creature
            .clone()
            .unwrap_or_else(|| self.preset.config())
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_the_default_minnow() {
        let config = KoiConfig::from_toml("").unwrap();
        assert_eq!(config.preset, Preset::Minnow);
        assert_eq!(config.creature(), CreatureConfig::minnow());
        assert_eq!(config.surface, SurfaceConfig::default());
        assert_eq!(config.run.tick_ms, 16);
        assert!(config.render.show_silhouette);
    }

    #[test]
    fn preset_applies_only_without_a_creature_table() {
        let config = KoiConfig::from_toml("preset = \"koi\"").unwrap();
        assert_eq!(config.creature(), CreatureConfig::koi());

        let config = KoiConfig::from_toml(
            r#"
preset = "koi"

[creature]
link_length = 40.0
"#,
        )
        .unwrap();
        let creature = config.creature();
        assert_eq!(creature.link_length, 40.0);
        // missing creature fields come from the minnow defaults
        assert_eq!(creature.body_sizes, CreatureConfig::minnow().body_sizes);
    }

    #[test]
    fn partial_sections_fill_in_defaults() {
        let config = KoiConfig::from_toml(
            r#"
[render]
show_dots = true

[surface]
width = 640
"#,
        )
        .unwrap();
        assert!(config.render.show_dots);
        assert!(config.render.show_silhouette);
        assert_eq!(config.surface.width, 640);
        assert_eq!(config.surface.height, 720);
    }

    #[test]
    fn invalid_creature_is_rejected() {
        let err = KoiConfig::from_toml(
            r#"
[creature]
body_sizes = [10.0]
"#,
        )
        .unwrap_err();
        assert!(format!("{:#}", err).contains("at least"), "{:#}", err);

        let fin_too_close = r#"
[creature]
fins = [{ anchor = 1, size = 10.0 }]
"#;
        assert!(KoiConfig::from_toml(fin_too_close).is_err());
        assert!(KoiConfig::from_toml("preset = \"eel\"").is_err());
    }

    #[test]
    fn toml_round_trips_every_preset() {
        for &preset in Preset::all() {
            let config = KoiConfig::new(preset);
            let text = config.to_toml().unwrap();
            assert_eq!(KoiConfig::from_toml(&text).unwrap(), config, "{}", text);
        }
    }
}
