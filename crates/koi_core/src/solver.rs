//! Fixed-link-length chain solver
//!
//! One forward pass per frame. The root snaps to the target, then each
//! follower is pulled toward its already-placed predecessor: its old
//! position only supplies a direction, and the new position sits exactly
//! one link length away along it. Links therefore drag behind the head
//! instead of solving a rigid system.
//!
//! The pass must stay sequential and in place; every step reads the
//! previous step's result.

use crate::chain::{Chain, Dot};
use crate::geometry::heading;

/// Drag-follow solver for a [`Chain`]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChainSolver {
    link_length: f32,
}

impl ChainSolver {
    pub fn new(link_length: f32) -> Self {
        Self { link_length }
    }

    pub fn link_length(&self) -> f32 {
        self.link_length
    }

    /// Snap the root to `target` and drag every follower behind it.
    pub fn solve(&self, chain: &mut Chain, target: Dot) {
        let dots = chain.dots_mut();
        dots[0] = target;

        for i in 1..dots.len() {
            let anchor = dots[i - 1].position();
            let angle = heading(anchor, dots[i].position());
            dots[i].set_position(anchor.offset(angle, self.link_length));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use koi_paint::Point;

    fn assert_close(actual: Point, expected: Point) {
        assert!(
            actual.distance(expected) < 1e-3,
            "expected {:?}, got {:?}",
            expected,
            actual
        );
    }

    #[test]
    fn root_snaps_to_target_exactly() {
        let mut chain = Chain::collapsed(Point::new(10.0, 10.0), 35.0, &[30.0, 20.0]).unwrap();
        let target = Dot::new(123.25, -7.5, 35.0);

        ChainSolver::new(32.0).solve(&mut chain, target);

        assert_eq!(*chain.head(), target);
    }

    #[test]
    fn every_link_has_the_fixed_length() {
        let dots = vec![
            Dot::new(0.0, 0.0, 10.0),
            Dot::new(5.0, 40.0, 10.0),
            Dot::new(-30.0, 70.0, 8.0),
            Dot::new(-31.0, 200.0, 6.0),
            Dot::new(12.0, 190.0, 4.0),
        ];
        let mut chain = Chain::new(dots).unwrap();

        ChainSolver::new(32.0).solve(&mut chain, Dot::new(300.0, -120.0, 10.0));

        for length in chain.link_lengths() {
            assert!((length - 32.0).abs() < 1e-3, "link length {}", length);
        }
    }

    #[test]
    fn followers_keep_their_direction_from_the_new_anchor() {
        let dots = vec![
            Dot::new(100.0, 100.0, 10.0),
            Dot::new(100.0, 100.0, 10.0),
            Dot::new(100.0, 100.0, 10.0),
        ];
        let mut chain = Chain::new(dots).unwrap();

        ChainSolver::new(50.0).solve(&mut chain, Dot::new(200.0, 100.0, 10.0));

        let positions: Vec<Point> = chain.positions().collect();
        assert_eq!(positions[0], Point::new(200.0, 100.0));
        assert_close(positions[1], Point::new(150.0, 100.0));
        assert_close(positions[2], Point::new(100.0, 100.0));
    }

    #[test]
    fn coincident_links_resolve_along_positive_x() {
        let mut chain = Chain::collapsed(Point::new(100.0, 100.0), 10.0, &[10.0, 10.0]).unwrap();

        ChainSolver::new(50.0).solve(&mut chain, Dot::new(100.0, 100.0, 10.0));

        let positions: Vec<Point> = chain.positions().collect();
        assert_eq!(positions[0], Point::new(100.0, 100.0));
        assert_close(positions[1], Point::new(150.0, 100.0));
        // chain[2] still sits on the old stack, which is now behind chain[1]
        assert_close(positions[2], Point::new(100.0, 100.0));
        assert!(positions.iter().all(|p| p.is_finite()));
    }

    #[test]
    fn identical_inputs_give_bit_identical_output() {
        let dots = vec![
            Dot::new(0.0, 0.0, 10.0),
            Dot::new(3.0, 31.0, 9.0),
            Dot::new(-20.0, 55.0, 8.0),
            Dot::new(-7.0, 80.0, 7.0),
        ];
        let target = Dot::new(41.7, -13.3, 10.0);
        let solver = ChainSolver::new(32.0);

        let mut first = Chain::new(dots.clone()).unwrap();
        let mut second = Chain::new(dots).unwrap();
        solver.solve(&mut first, target);
        solver.solve(&mut second, target);

        for (a, b) in first.dots().iter().zip(second.dots()) {
            assert_eq!(a.x.to_bits(), b.x.to_bits());
            assert_eq!(a.y.to_bits(), b.y.to_bits());
        }
    }
}
