//! Closed body outline around a chain
//!
//! The contour starts at a "nose" point in front of the head, runs down one
//! side of the chain, comes back up the other and ends on the nose again, so
//! a single path can trace it. For a chain of `L` dots it always holds
//! `2L + 2` points.
//!
//! The nose is pushed along the reversed head direction (`+π`) while every
//! other point is pushed sideways (`±π/2`); the head reads as a rounded snout
//! because of that difference.

use std::f32::consts::{FRAC_PI_2, PI};

use koi_paint::Point;

use crate::chain::{Chain, Dot};
use crate::geometry::{heading, smooth_run, EdgeSegment};

/// Ordered outline points, first and last both the nose point
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Silhouette {
    points: Vec<Point>,
}

impl Silhouette {
    /// Build the outline for the current chain positions.
    pub fn build(chain: &Chain) -> Self {
        let dots = chain.dots();
        let len = dots.len();
        let mut points = Vec::with_capacity(2 * len + 2);

        let root = &dots[0];
        let nose_angle = heading(root.position(), dots[1].position()) + PI;
        let nose = root.position().offset(nose_angle, root.size);
        points.push(nose);

        // down the first side
        for i in 0..len {
            let next = dots.get(i + 1);
            let reference = next.unwrap_or_else(|| &dots[i - 1]);
            points.push(side_point(&dots[i], reference, next.is_some()));
        }

        // back up the other side
        for i in (0..len).rev() {
            let previous = i.checked_sub(1).map(|p| &dots[p]);
            let reference = previous.unwrap_or_else(|| &dots[i + 1]);
            points.push(side_point(&dots[i], reference, previous.is_some()));
        }

        points.push(nose);

        Self { points }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn nose(&self) -> Option<Point> {
        self.points.first().copied()
    }

    /// Smoothed outline segments following the nose, ready to trace as one
    /// path starting at [`nose`](Self::nose).
    pub fn outline(&self) -> Vec<EdgeSegment> {
        smooth_run(&self.points, 1..self.points.len())
    }
}

fn side_point(dot: &Dot, reference: &Dot, toward_neighbor: bool) -> Point {
    let quarter = if toward_neighbor { FRAC_PI_2 } else { -FRAC_PI_2 };
    let angle = heading(dot.position(), reference.position()) + quarter;
    dot.position().offset(angle, dot.size)
}
