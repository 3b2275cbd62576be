use super::{Point2, Vector2};

/// Denominator shared by the `ua` and `ub` line parameters.
///
/// Zero exactly when the direction vectors of the two lines are parallel
/// (or when either line is degenerate).
fn denominator(a1: &Point2, a2: &Point2, b1: &Point2, b2: &Point2) -> f64 {
    (b2.y - b1.y) * (a2.x - a1.x) - (b2.x - b1.x) * (a2.y - a1.y)
}

fn numerator_ua(a1: &Point2, b1: &Point2, b2: &Point2) -> f64 {
    (b2.x - b1.x) * (a1.y - b1.y) - (b2.y - b1.y) * (a1.x - b1.x)
}

fn numerator_ub(a1: &Point2, a2: &Point2, b1: &Point2) -> f64 {
    (a2.x - a1.x) * (a1.y - b1.y) - (a2.y - a1.y) * (a1.x - b1.x)
}

/// Returns `true` iff line `a1→a2` and line `b1→b2` are parallel.
///
/// The test is exact: nearly parallel lines are not parallel.
/// A degenerate line (coincident points) counts as parallel to everything,
/// so the intersection helpers below return `None` for it. Use the
/// [`Line`](crate::geometry::Line) methods to reject degenerate lines instead.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn lines_parallel_2d(a1: &Point2, a2: &Point2, b1: &Point2, b2: &Point2) -> bool {
    denominator(a1, a2, b1, b2) == 0.0
}

/// Intersection of the infinite lines through `a1→a2` and `b1→b2`.
///
/// Returns `None` iff the lines are parallel. The point is evaluated along
/// line A.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn line_line_intersect_2d(a1: &Point2, a2: &Point2, b1: &Point2, b2: &Point2) -> Option<Point2> {
    let denom = denominator(a1, a2, b1, b2);
    if denom == 0.0 {
        return None;
    }
    let ua = numerator_ua(a1, b1, b2) / denom;
    Some(point_at(a1, &(a2 - a1), ua))
}

/// Bounded segment-segment intersection in 2D.
///
/// Both parameters must lie in `[0, 1]`; touching at an endpoint counts.
/// Parallel segments never intersect, even when collinear and overlapping.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn segment_segment_intersect_2d(
    a1: &Point2,
    a2: &Point2,
    b1: &Point2,
    b2: &Point2,
) -> Option<Point2> {
    let denom = denominator(a1, a2, b1, b2);
    if denom == 0.0 {
        return None;
    }
    let ua = numerator_ua(a1, b1, b2) / denom;
    let ub = numerator_ub(a1, a2, b1) / denom;
    if !(0.0..=1.0).contains(&ua) || !(0.0..=1.0).contains(&ub) {
        return None;
    }
    Some(point_at(a1, &(a2 - a1), ua))
}

/// Linear interpolation: `origin + dir * t`.
#[must_use]
pub fn point_at(origin: &Point2, dir: &Vector2, t: f64) -> Point2 {
    Point2::new(origin.x + t * dir.x, origin.y + t * dir.y)
}
