//! Whole-chain turning estimate, used to bias tail rendering

use crate::chain::Chain;
use crate::geometry::heading;

/// Sum of the heading change at every interior dot.
///
/// The sum is left raw: not averaged and not wrapped into `[-π, π]`.
/// Positive means turning toward increasing angles (rightward on a y-down
/// surface), negative the other way. A straight chain gives exactly zero.
pub fn estimate_curvature(chain: &Chain) -> f32 {
    chain
        .dots()
        .windows(3)
        .map(|triple| {
            let p0 = triple[0].position();
            let p1 = triple[1].position();
            let p2 = triple[2].position();
            heading(p1, p2) - heading(p0, p1)
        })
        .sum()
}
