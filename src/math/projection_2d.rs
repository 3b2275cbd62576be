use super::Point2;
use crate::error::{GeometryError, Result};

/// Foot of the perpendicular dropped from `point` onto the infinite line
/// through `p1` and `p2`.
///
/// # Errors
///
/// Returns `GeometryError::Degenerate` if `p1` and `p2` coincide.
pub fn perpendicular_foot_2d(p1: &Point2, p2: &Point2, point: &Point2) -> Result<Point2> {
    let dx = p2.x - p1.x;
    let dy = p2.y - p1.y;
    let len_sq = dy * dy + dx * dx;
    if len_sq == 0.0 {
        return Err(GeometryError::Degenerate(format!(
            "cannot project onto line through coincident points ({}, {})",
            p1.x, p1.y
        ))
        .into());
    }

    // Signed offset of `point` from the line, in units of the direction length.
    let k = (dy * (point.x - p1.x) - dx * (point.y - p1.y)) / len_sq;
    Ok(Point2::new(point.x - k * dy, point.y + k * dx))
}

/// Foot of the perpendicular dropped from the origin onto the line through
/// `p1` and `p2`: the point of that line closest to the origin.
///
/// # Errors
///
/// Returns `GeometryError::Degenerate` if `p1` and `p2` coincide.
pub fn perpendicular_foot_from_origin_2d(p1: &Point2, p2: &Point2) -> Result<Point2> {
    perpendicular_foot_2d(p1, p2, &Point2::origin())
}
