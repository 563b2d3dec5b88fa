//! Creature configuration and presets

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::chain::MIN_CHAIN_LEN;
use crate::error::{KoiError, Result};

/// Everything that distinguishes one creature from another
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreatureConfig {
    /// Fixed distance between consecutive dots
    pub link_length: f32,
    /// Render radius of the root dot; the target tracker preserves it
    pub head_size: f32,
    /// Render radii of the followers, neck to tail tip
    pub body_sizes: Vec<f32>,
    pub eye_spacing: f32,
    pub eye_size: f32,
    /// Pupils are drawn on top of the eyes when set
    pub pupil_size: Option<f32>,
    /// Fins in draw order; the same anchor may appear more than once
    pub fins: Vec<FinConfig>,
    /// How far the tail's inner edge sits from the chain
    pub tail_offset: f32,
}

impl Default for CreatureConfig {
    fn default() -> Self {
        Self::minnow()
    }
}

impl CreatureConfig {
    /// Short, finless body with plain eyes
    pub fn minnow() -> Self {
        Self {
            link_length: 32.0,
            head_size: 35.0,
            body_sizes: vec![38.0, 32.0, 24.0, 12.0, 6.0],
            eye_spacing: 15.0,
            eye_size: 5.0,
            pupil_size: None,
            fins: Vec::new(),
            tail_offset: 10.0,
        }
    }

    /// Long-linked body with three fins, wide-set eyes and pupils
    pub fn koi() -> Self {
        Self {
            link_length: 50.0,
            head_size: 22.0,
            body_sizes: vec![38.0, 32.0, 24.0, 12.0, 6.0],
            eye_spacing: 20.0,
            eye_size: 15.0,
            pupil_size: Some(5.0),
            fins: vec![
                FinConfig::new(2, 18.0),
                FinConfig::new(4, 10.0),
                FinConfig::new(4, 10.0),
            ],
            tail_offset: 10.0,
        }
    }

    /// Number of dots in the chain, head included
    pub fn chain_len(&self) -> usize {
        self.body_sizes.len() + 1
    }

    /// Reject configurations the frame loop could not render.
    pub fn validate(&self) -> Result<()> {
        let len = self.chain_len();
        if len < MIN_CHAIN_LEN {
            return Err(KoiError::TooShort {
                len,
                min: MIN_CHAIN_LEN,
            });
        }
        if !self.link_length.is_finite() || self.link_length <= 0.0 {
            return Err(KoiError::InvalidLinkLength(self.link_length));
        }

        let sizes = std::iter::once(("head".to_string(), self.head_size))
            .chain(
                self.body_sizes
                    .iter()
                    .enumerate()
                    .map(|(i, size)| (format!("body dot {}", i + 1), *size)),
            )
            .chain(std::iter::once(("eye".to_string(), self.eye_size)))
            .chain(self.pupil_size.map(|size| ("pupil".to_string(), size)));
        for (what, value) in sizes {
            if !value.is_finite() || value < 0.0 {
                return Err(KoiError::InvalidSize { what, value });
            }
        }

        for (what, value) in [
            ("eye spacing", self.eye_spacing),
            ("tail offset", self.tail_offset),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(KoiError::InvalidScale { what, value });
            }
        }

        for fin in &self.fins {
            if fin.anchor < 2 || fin.anchor >= len {
                return Err(KoiError::FinAnchorOutOfRange {
                    anchor: fin.anchor,
                    len,
                });
            }
            if !fin.size.is_finite() || fin.size < 0.0 {
                return Err(KoiError::InvalidSize {
                    what: format!("fin at dot {}", fin.anchor),
                    value: fin.size,
                });
            }
        }

        Ok(())
    }
}

/// One fin: the chain dot it hangs from and how far it spreads
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FinConfig {
    /// Chain index, at least 2
    pub anchor: usize,
    /// Reach to each side is `size * FIN_REACH`
    pub size: f32,
}

impl FinConfig {
    pub const fn new(anchor: usize, size: f32) -> Self {
        Self { anchor, size }
    }
}

/// Named starting points for [`CreatureConfig`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    #[default]
    Minnow,
    Koi,
}

impl Preset {
    pub fn all() -> &'static [Preset] {
        &[Preset::Minnow, Preset::Koi]
    }

    pub fn id(&self) -> &'static str {
        match self {
            Preset::Minnow => "minnow",
            Preset::Koi => "koi",
        }
    }

    pub fn config(&self) -> CreatureConfig {
        match self {
            Preset::Minnow => CreatureConfig::minnow(),
            Preset::Koi => CreatureConfig::koi(),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Preset {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Preset::all()
            .iter()
            .copied()
            .find(|preset| preset.id().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown preset '{}', expected minnow or koi", s))
    }
}
