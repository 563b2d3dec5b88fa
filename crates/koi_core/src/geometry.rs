//! Direction helpers shared by the solver, estimator and builders

use std::ops::Range;

use koi_paint::Point;

/// Angle of the vector `from -> to`, in radians.
///
/// Coincident points have no direction; they resolve to `0.0`. The check is
/// explicit because `atan2` of signed zeros can return `±π`, which would make
/// the result depend on how the points happened to be computed.
pub fn heading(from: Point, to: Point) -> f32 {
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    if dx == 0.0 && dy == 0.0 {
        0.0
    } else {
        dy.atan2(dx)
    }
}

/// One step of a smoothed outline
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EdgeSegment {
    /// Quadratic curve bending toward `control`
    Curve { control: Point, end: Point },
    Line(Point),
}

impl EdgeSegment {
    pub fn end(&self) -> Point {
        match *self {
            EdgeSegment::Curve { end, .. } => end,
            EdgeSegment::Line(end) => end,
        }
    }
}

/// Smooth the points in `range` into curve segments.
///
/// Each point becomes the control of a curve ending halfway to the point
/// after it. When no point follows, a straight segment ends on the point
/// itself. The lookahead reads past `range` if `points` continues, so a
/// sub-run of a longer line blends into the rest of it.
pub fn smooth_run(points: &[Point], range: Range<usize>) -> Vec<EdgeSegment> {
    range
        .filter_map(|i| {
            let point = *points.get(i)?;
            Some(match points.get(i + 1) {
                Some(&next) => EdgeSegment::Curve {
                    control: point,
                    end: point.midpoint(next),
                },
                None => EdgeSegment::Line(point),
            })
        })
        .collect()
}
