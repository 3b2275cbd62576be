use crate::error::Result;
use crate::math::triangle_2d::{barycentric_2d, BarycentricCoordinates};
use crate::math::Point2;

use super::Polygon;

/// A triangle with three named corners.
///
/// Usable as general geometry (convert with [`Triangle::to_polygon`]); it is
/// not a [`SupportFunction`](super::SupportFunction) figure of its own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub a: Point2,
    pub b: Point2,
    pub c: Point2,
}

impl Triangle {
    /// Creates a new triangle.
    #[must_use]
    pub fn new(a: Point2, b: Point2, c: Point2) -> Self {
        Self { a, b, c }
    }

    /// Barycentric coordinates of `point` relative to `(a, b, c)`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` if the triangle has zero area.
    pub fn barycentric(&self, point: &Point2) -> Result<BarycentricCoordinates> {
        barycentric_2d(&self.a, &self.b, &self.c, point)
    }

    /// Returns `true` if `point` lies inside the triangle or on its boundary.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` if the triangle has zero area.
    pub fn contains_point(&self, point: &Point2) -> Result<bool> {
        Ok(self.barycentric(point)?.is_inside())
    }

    /// Returns the triangle as a three-corner polygon `[a, b, c]`.
    #[must_use]
    pub fn to_polygon(&self) -> Polygon {
        Polygon::from(*self)
    }
}

impl From<Triangle> for Polygon {
    fn from(triangle: Triangle) -> Self {
        // Three corners always satisfy the polygon invariant.
        Polygon::from_corners_unchecked(vec![triangle.a, triangle.b, triangle.c])
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn triangle() -> Triangle {
        Triangle::new(Point2::new(1.0, 1.0), Point2::new(4.0, 1.0), Point2::new(1.0, 4.0))
    }

    #[test]
    fn contains_point_inside() {
        assert!(triangle().contains_point(&Point2::new(2.0, 2.0)).unwrap());
    }

    #[test]
    fn does_not_contain_point_outside() {
        assert!(!triangle().contains_point(&Point2::new(3.0, 3.0)).unwrap());
    }

    #[test]
    fn barycentric_weights_sum_to_one() {
        let coords = triangle().barycentric(&Point2::new(-3.0, 7.5)).unwrap();
        assert_relative_eq!(coords.u + coords.v + coords.w, 1.0, epsilon = 1e-12);
        assert!(!coords.is_inside());
    }

    #[test]
    fn degenerate_triangle_fails() {
        let flat = Triangle::new(Point2::new(0.0, 0.0), Point2::new(1.0, 0.0), Point2::new(2.0, 0.0));
        assert!(flat.contains_point(&Point2::new(0.5, 0.0)).is_err());
    }

    #[test]
    fn to_polygon_keeps_corner_order() {
        let t = triangle();
        let p = t.to_polygon();
        assert_eq!(p.corners(), &[t.a, t.b, t.c]);
        assert_relative_eq!(p.area(), 4.5);
    }
}
