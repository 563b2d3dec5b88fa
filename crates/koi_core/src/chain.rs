//! Dot and chain model
//!
//! A [`Chain`] is the creature's body line, head first. Index 0 is the root,
//! which the solver snaps to the tracked target every frame; the remaining
//! dots follow at a fixed link length.

use koi_paint::Point;
use serde::{Deserialize, Serialize};

use crate::error::{KoiError, Result};

/// Fins reference the dot two links behind their anchor
pub const MIN_CHAIN_LEN: usize = 3;

/// A chain position with a render radius
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Dot {
    pub x: f32,
    pub y: f32,
    /// Render radius; the solver never reads it
    pub size: f32,
}

impl Dot {
    pub const fn new(x: f32, y: f32, size: f32) -> Self {
        Self { x, y, size }
    }

    pub fn at(position: Point, size: f32) -> Self {
        Self::new(position.x, position.y, size)
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn set_position(&mut self, position: Point) {
        self.x = position.x;
        self.y = position.y;
    }
}

/// Ordered dots from head to tail, never shorter than [`MIN_CHAIN_LEN`]
#[derive(Clone, Debug, PartialEq)]
pub struct Chain {
    dots: Vec<Dot>,
}

#[allow(clippy::len_without_is_empty)]
impl Chain {
    /// Build a chain from explicit dots.
    ///
    /// # Errors
    ///
    /// Returns [`KoiError::TooShort`] for fewer than three dots and
    /// [`KoiError::InvalidSize`] for a negative or non-finite size.
    pub fn new(dots: Vec<Dot>) -> Result<Self> {
        if dots.len() < MIN_CHAIN_LEN {
            return Err(KoiError::TooShort {
                len: dots.len(),
                min: MIN_CHAIN_LEN,
            });
        }
        for (index, dot) in dots.iter().enumerate() {
            if !dot.size.is_finite() || dot.size < 0.0 {
                return Err(KoiError::InvalidSize {
                    what: format!("dot {}", index),
                    value: dot.size,
                });
            }
        }
        Ok(Self { dots })
    }

    /// Build a chain with every dot stacked on `origin`: the head gets
    /// `head_size`, followers take `body_sizes` in order.
    pub fn collapsed(origin: Point, head_size: f32, body_sizes: &[f32]) -> Result<Self> {
        let dots = std::iter::once(head_size)
            .chain(body_sizes.iter().copied())
            .map(|size| Dot::at(origin, size))
            .collect();
        Self::new(dots)
    }

    pub fn len(&self) -> usize {
        self.dots.len()
    }

    pub fn dots(&self) -> &[Dot] {
        &self.dots
    }

    pub(crate) fn dots_mut(&mut self) -> &mut [Dot] {
        &mut self.dots
    }

    pub fn get(&self, index: usize) -> Option<&Dot> {
        self.dots.get(index)
    }

    pub fn head(&self) -> &Dot {
        &self.dots[0]
    }

    pub fn positions(&self) -> impl Iterator<Item = Point> + '_ {
        self.dots.iter().map(Dot::position)
    }

    /// Distance between each dot and its predecessor, head to tail
    pub fn link_lengths(&self) -> impl Iterator<Item = f32> + '_ {
        self.dots
            .windows(2)
            .map(|pair| pair[0].position().distance(pair[1].position()))
    }

    /// Largest deviation of any link from `link_length`
    pub fn max_link_error(&self, link_length: f32) -> f32 {
        self.link_lengths()
            .map(|length| (length - link_length).abs())
            .fold(0.0, f32::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_short_chains() {
        let err = Chain::new(vec![Dot::default(); 2]).unwrap_err();
        assert_eq!(err, KoiError::TooShort { len: 2, min: 3 });

        assert!(Chain::collapsed(Point::ZERO, 10.0, &[5.0]).is_err());
        assert!(Chain::collapsed(Point::ZERO, 10.0, &[5.0, 4.0]).is_ok());
    }

    #[test]
    fn rejects_bad_sizes() {
        let err = Chain::collapsed(Point::ZERO, 10.0, &[5.0, f32::NAN]).unwrap_err();
        assert!(matches!(err, KoiError::InvalidSize { .. }));

        let err = Chain::collapsed(Point::ZERO, -1.0, &[5.0, 4.0]).unwrap_err();
        assert!(matches!(err, KoiError::InvalidSize { ref what, .. } if what == "dot 0"));
    }

    #[test]
    fn collapsed_chain_stacks_dots() {
        let chain = Chain::collapsed(Point::new(640.0, 360.0), 35.0, &[38.0, 32.0, 24.0]).unwrap();
        assert_eq!(chain.len(), 4);
        assert_eq!(chain.head().size, 35.0);
        assert_eq!(chain.dots()[1].size, 38.0);
        assert!(chain.positions().all(|p| p == Point::new(640.0, 360.0)));
        assert!(chain.link_lengths().all(|l| l == 0.0));
        assert_eq!(chain.max_link_error(32.0), 32.0);
    }
}
