use super::Point2;
use crate::error::{GeometryError, Result};

/// Barycentric weights of a point relative to a triangle `(a, b, c)`.
///
/// `point = u * a + v * b + w * c` with `u + v + w = 1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarycentricCoordinates {
    /// Weight of corner `a`.
    pub u: f64,
    /// Weight of corner `b`.
    pub v: f64,
    /// Weight of corner `c`.
    pub w: f64,
}

impl BarycentricCoordinates {
    /// Returns `true` if all weights are non-negative, i.e. the point lies
    /// inside the triangle or on its boundary.
    #[must_use]
    pub fn is_inside(&self) -> bool {
        self.u >= 0.0 && self.v >= 0.0 && self.w >= 0.0
    }
}

/// Computes the barycentric coordinates of `point` with respect to the
/// triangle `(a, b, c)`.
///
/// # Errors
///
/// Returns `GeometryError::Degenerate` if the triangle has zero area.
pub fn barycentric_2d(
    a: &Point2,
    b: &Point2,
    c: &Point2,
    point: &Point2,
) -> Result<BarycentricCoordinates> {
    let v0 = b - a;
    let v1 = c - a;
    let v2 = point - a;

    let d00 = v0.dot(&v0);
    let d01 = v0.dot(&v1);
    let d11 = v1.dot(&v1);
    let d20 = v2.dot(&v0);
    let d21 = v2.dot(&v1);

    let denom = d00 * d11 - d01 * d01;
    if denom == 0.0 || !denom.is_finite() {
        return Err(GeometryError::Degenerate(format!(
            "zero-area triangle ({}, {}), ({}, {}), ({}, {})",
            a.x, a.y, b.x, b.y, c.x, c.y
        ))
        .into());
    }

    let inv = 1.0 / denom;
    let v = (d11 * d20 - d01 * d21) * inv;
    let w = (d00 * d21 - d01 * d20) * inv;
    Ok(BarycentricCoordinates {
        u: 1.0 - v - w,
        v,
        w,
    })
}

/// Returns `true` if `point` lies inside the triangle `(a, b, c)` or on its
/// boundary.
///
/// # Errors
///
/// Returns `GeometryError::Degenerate` if the triangle has zero area.
pub fn point_in_triangle_2d(a: &Point2, b: &Point2, c: &Point2, point: &Point2) -> Result<bool> {
    Ok(barycentric_2d(a, b, c, point)?.is_inside())
}
