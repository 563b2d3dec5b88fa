//! Anchor geometry for eyes, fins and tail
//!
//! Everything here is derived from the solved chain each frame and thrown
//! away afterwards.

use std::f32::consts::FRAC_PI_2;
use std::ops::RangeInclusive;

use koi_paint::Point;

use crate::chain::Chain;
use crate::geometry::{heading, smooth_run, EdgeSegment};

/// Chain indices the tail is drawn over, clamped to the chain length
pub const TAIL_DOTS: RangeInclusive<usize> = 1..=3;

/// Eye centres on either side of the head
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Eyes {
    pub left: Point,
    pub right: Point,
}

impl Eyes {
    /// Place both eyes `spacing` away from the head, perpendicular to the
    /// direction of travel (from the first follower toward the head).
    pub fn locate(chain: &Chain, spacing: f32) -> Self {
        let head = chain.dots()[0].position();
        let neck = chain.dots()[1].position();
        let across = heading(neck, head) + FRAC_PI_2;
        Self {
            left: head.offset(across, spacing),
            right: head.offset(across, -spacing),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = Point> {
        [self.left, self.right].into_iter()
    }
}

/// Fin reach to each side, as a multiple of the fin size
pub const FIN_REACH: f32 = 3.5;

/// A petal-shaped fin hung off one chain dot
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fin {
    /// The dot the fin hangs from
    pub anchor: Point,
    /// The dot two links toward the head; the petal folds back through it
    pub neighbor: Point,
    pub left_tip: Point,
    pub right_tip: Point,
}

impl Fin {
    /// Fin at chain index `anchor`, reaching `size * FIN_REACH` to each side
    /// of the body. `None` if the anchor has no dot two links ahead of it.
    pub fn at(chain: &Chain, anchor: usize, size: f32) -> Option<Self> {
        let neighbor = chain.get(anchor.checked_sub(2)?)?.position();
        let position = chain.get(anchor)?.position();
        let along = heading(neighbor, position);
        let reach = size * FIN_REACH;

        Some(Self {
            anchor: position,
            neighbor,
            left_tip: position.offset(along + FRAC_PI_2, reach),
            right_tip: position.offset(along - FRAC_PI_2, reach),
        })
    }

    /// Closed petal from the anchor through the left tip, the neighbor and
    /// the right tip. Each edge's control point is the midpoint of its ends.
    pub fn petal(&self) -> [EdgeSegment; 4] {
        let corners = [self.left_tip, self.neighbor, self.right_tip, self.anchor];
        let mut from = self.anchor;
        corners.map(|end| {
            let control = from.midpoint(end);
            from = end;
            EdgeSegment::Curve { control, end }
        })
    }
}

/// Tail outline: a smoothed outer edge along the chain and an inner edge
/// whose points swing with the curvature.
#[derive(Clone, Debug, PartialEq)]
pub struct Tail {
    pub start: Point,
    pub outer: Vec<EdgeSegment>,
    /// Points walked back toward the start after the outer edge
    pub inner: Vec<Point>,
}

impl Tail {
    /// Build the tail over [`TAIL_DOTS`].
    ///
    /// Inner points take each dot's direction toward its predecessor, turn it
    /// by `curvature` radians and step `offset` along it, so a bending chain
    /// flicks the tail.
    pub fn build(chain: &Chain, curvature: f32, offset: f32) -> Self {
        let positions: Vec<Point> = chain.positions().collect();
        let first = *TAIL_DOTS.start();
        let last = (*TAIL_DOTS.end()).min(positions.len() - 1);

        let inner = (first + 1..=last)
            .rev()
            .map(|i| {
                let angle = heading(positions[i], positions[i - 1]) + curvature;
                positions[i].offset(angle, offset)
            })
            .collect();

        Self {
            start: positions[first],
            outer: smooth_run(&positions, first..last + 1),
            inner,
        }
    }
}
