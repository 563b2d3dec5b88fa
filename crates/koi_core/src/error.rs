//! Construction-time error types
//!
//! Every failure is raised while building a chain or validating a
//! configuration. Once a [`Simulation`](crate::Simulation) exists, frames
//! cannot fail.

use thiserror::Error;

/// Errors raised when a creature configuration is rejected
#[derive(Error, Debug, Clone, PartialEq)]
pub enum KoiError {
    /// Fins look two links behind their anchor, so a chain needs three dots
    #[error("Chain needs at least {min} dots, got {len}")]
    TooShort { len: usize, min: usize },

    #[error("Link length must be finite and positive, got {0}")]
    InvalidLinkLength(f32),

    /// A dot size (or eye/pupil size) was negative or not finite
    #[error("Invalid size for {what}: {value}")]
    InvalidSize { what: String, value: f32 },

    #[error("Fin anchor {anchor} is outside 2..{len}")]
    FinAnchorOutOfRange { anchor: usize, len: usize },

    /// Fin scale, tail offset or eye spacing was negative or not finite
    #[error("Invalid {what}: {value}")]
    InvalidScale { what: &'static str, value: f32 },
}

/// Result type for koi_core operations
pub type Result<T> = std::result::Result<T, KoiError>;
