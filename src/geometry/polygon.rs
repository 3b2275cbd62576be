use crate::error::{GeometryError, Result};
use crate::math::polygon_2d::{area_2d, centroid_2d, is_non_simple_2d, segments_2d, signed_area_2d};
use crate::math::{Point2, Vector2, VectorExt};

use super::{Line, SupportFunction};

/// A closed polygon defined by an ordered list of corners.
///
/// Consecutive corners form the boundary segments and the last corner
/// connects back to the first. The corner order is kept exactly as given:
/// it decides the winding (and therefore the sign of the signed area) and
/// the tie-break of support queries.
///
/// Support queries assume a convex, simple polygon; use
/// [`Polygon::is_self_intersecting`] to check the latter.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    corners: Vec<Point2>,
}

impl Polygon {
    /// Creates a new polygon from its corners.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::TooFewCorners` if fewer than 3 corners are given.
    pub fn new(corners: Vec<Point2>) -> Result<Self> {
        if corners.len() < 3 {
            return Err(GeometryError::TooFewCorners {
                count: corners.len(),
            }
            .into());
        }
        Ok(Self { corners })
    }

    /// Wraps corners the caller already knows to number at least 3.
    pub(crate) fn from_corners_unchecked(corners: Vec<Point2>) -> Self {
        debug_assert!(corners.len() >= 3);
        Self { corners }
    }

    /// Creates an axis-aligned rectangle with its lower-left corner at
    /// `lower_left`.
    ///
    /// Corners are wound counter-clockwise starting from the lower-left one.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ParameterOutOfRange` if `width` or `height`
    /// is negative.
    pub fn rectangle(lower_left: Point2, width: f64, height: f64) -> Result<Self> {
        check_non_negative("width", width)?;
        check_non_negative("height", height)?;
        Self::new(vec![
            lower_left,
            lower_left + Vector2::new(width, 0.0),
            lower_left + Vector2::new(width, height),
            lower_left + Vector2::new(0.0, height),
        ])
    }

    /// Returns the corners in their original order.
    #[must_use]
    pub fn corners(&self) -> &[Point2] {
        &self.corners
    }

    /// Returns the number of corners (always at least 3).
    #[must_use]
    pub fn corner_count(&self) -> usize {
        self.corners.len()
    }

    /// Returns the boundary segments, starting with the closing segment from
    /// the last corner to the first.
    pub fn segments(&self) -> impl Iterator<Item = Line> + '_ {
        segments_2d(&self.corners).map(|(a, b)| Line::new(a, b))
    }

    /// Signed area: positive for counter-clockwise, negative for clockwise.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        signed_area_2d(&self.corners)
    }

    /// Unsigned area.
    #[must_use]
    pub fn area(&self) -> f64 {
        area_2d(&self.corners)
    }

    /// Centroid (center of mass of the enclosed area), for either winding.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` if the polygon has zero area.
    pub fn centroid(&self) -> Result<Point2> {
        centroid_2d(&self.corners)
    }

    /// Returns whether two boundary segments cross away from their end points.
    #[must_use]
    pub fn is_self_intersecting(&self) -> bool {
        is_non_simple_2d(&self.corners)
    }

    /// Returns the same polygon with the opposite winding.
    #[must_use]
    pub fn reversed(&self) -> Self {
        let mut corners = self.corners.clone();
        corners.reverse();
        Self { corners }
    }

    /// Returns a polygon with every corner mapped through `f`.
    #[must_use]
    pub(crate) fn map_corners(&self, f: impl Fn(&Point2) -> Point2) -> Self {
        Self {
            corners: self.corners.iter().map(f).collect(),
        }
    }
}

fn check_non_negative(parameter: &'static str, value: f64) -> Result<()> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(GeometryError::ParameterOutOfRange {
            parameter,
            value,
            min: 0.0,
            max: f64::INFINITY,
        }
        .into())
    }
}

impl SupportFunction for Polygon {
    /// Scans all corners and keeps the one with the greatest projection onto
    /// `direction`. On ties the earliest corner wins.
    fn support_point(&self, direction: &Vector2) -> Result<Point2> {
        let mut best = self.corners[0];
        let mut best_dot = best.coords.dot(direction);
        for corner in &self.corners[1..] {
            let dot = corner.coords.dot(direction);
            if dot > best_dot {
                best_dot = dot;
                best = *corner;
            }
        }
        Ok(best)
    }

    /// Voronoi-region test against the edge between the two corners nearest
    /// to `position`. Only valid for convex polygons, where those two corners
    /// are adjacent.
    fn closest_outline_point(&self, position: &Point2) -> Result<Point2> {
        let mut by_distance: Vec<Point2> = self.corners.clone();
        by_distance.sort_by(|a, b| {
            (a - position)
                .norm_squared()
                .total_cmp(&(b - position).norm_squared())
        });
        let closest = by_distance[0];
        let second = by_distance[1];

        if (position - closest).is_within_90_degrees(&(second - closest)) {
            Line::new(closest, second).perpendicular_foot(position)
        } else {
            Ok(closest)
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::math::TOLERANCE;

    fn polygon(coords: &[(f64, f64)]) -> Polygon {
        Polygon::new(coords.iter().map(|&(x, y)| Point2::new(x, y)).collect()).unwrap()
    }

    fn tall_rectangle() -> Polygon {
        polygon(&[(1.0, 1.0), (1.0, 3.0), (2.0, 3.0), (2.0, 1.0)])
    }

    #[test]
    fn too_few_corners() {
        let result = Polygon::new(vec![Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)]);
        assert!(result.is_err());
    }

    #[test]
    fn corner_order_is_preserved() {
        let p = polygon(&[(3.0, 0.0), (0.0, 0.0), (0.0, 3.0)]);
        assert_eq!(p.corners()[0], Point2::new(3.0, 0.0));
        assert_eq!(p.corners()[2], Point2::new(0.0, 3.0));
        assert_eq!(p.corner_count(), 3);
    }

    #[test]
    fn rectangle_corners_ccw() {
        let r = Polygon::rectangle(Point2::new(1.0, 2.0), 3.0, 4.0).unwrap();
        assert_eq!(
            r.corners(),
            &[
                Point2::new(1.0, 2.0),
                Point2::new(4.0, 2.0),
                Point2::new(4.0, 6.0),
                Point2::new(1.0, 6.0)
            ]
        );
        assert_relative_eq!(r.signed_area(), 12.0);
    }

    #[test]
    fn rectangle_negative_size_fails() {
        assert!(Polygon::rectangle(Point2::origin(), -1.0, 1.0).is_err());
        assert!(Polygon::rectangle(Point2::origin(), 1.0, -1.0).is_err());
    }

    #[test]
    fn segments_cover_boundary() {
        let p = tall_rectangle();
        let segments: Vec<Line> = p.segments().collect();
        assert_eq!(segments.len(), 4);
        assert_eq!(*segments[0].point1(), Point2::new(2.0, 1.0));
        assert_eq!(*segments[0].point2(), Point2::new(1.0, 1.0));
    }

    #[test]
    fn reversed_keeps_area_and_centroid() {
        let p = polygon(&[(1.0, 1.0), (0.0, 2.0), (1.0, 3.0), (2.0, 3.0)]);
        let r = p.reversed();
        assert_relative_eq!(r.signed_area(), -p.signed_area());
        assert_relative_eq!(r.area(), p.area());
        assert_relative_eq!(r.centroid().unwrap(), p.centroid().unwrap(), epsilon = TOLERANCE);
    }

    #[test]
    fn self_intersection_query() {
        assert!(!tall_rectangle().is_self_intersecting());
        assert!(polygon(&[(1.0, 1.0), (4.0, 1.0), (1.0, 4.0), (4.0, 4.0)]).is_self_intersecting());
    }

    // ── support point ──

    #[test]
    fn support_four_corners_diagonal() {
        let p = polygon(&[(1.0, 1.0), (0.0, 2.0), (1.0, 3.0), (2.0, 3.0)]);
        let s = p.support_point(&Vector2::new(1.0, 1.0)).unwrap();
        assert_eq!(s, Point2::new(2.0, 3.0));
    }

    #[test]
    fn support_five_corners_diagonal() {
        let p = polygon(&[(1.0, 1.0), (0.0, 2.0), (1.0, 3.0), (2.0, 3.0), (4.0, 2.0)]);
        let s = p.support_point(&Vector2::new(1.0, 1.0)).unwrap();
        assert_eq!(s, Point2::new(4.0, 2.0));
    }

    #[test]
    fn support_five_corners_down_right() {
        let p = polygon(&[(1.0, 1.0), (0.0, 2.0), (1.0, 3.0), (2.0, 3.0), (4.0, 2.0)]);
        let s = p.support_point(&Vector2::new(1.0, -1.0)).unwrap();
        assert_eq!(s, Point2::new(4.0, 2.0));
    }

    #[test]
    fn support_tie_keeps_first_corner() {
        // (1, 3) and (2, 3) project equally onto +y.
        let p = polygon(&[(1.0, 1.0), (0.0, 2.0), (1.0, 3.0), (2.0, 3.0)]);
        assert_eq!(p.support_point(&Vector2::y()).unwrap(), Point2::new(1.0, 3.0));
        assert_eq!(p.reversed().support_point(&Vector2::y()).unwrap(), Point2::new(2.0, 3.0));
    }

    #[test]
    fn support_zero_direction_returns_first_corner() {
        let p = tall_rectangle();
        assert_eq!(p.support_point(&Vector2::zeros()).unwrap(), Point2::new(1.0, 1.0));
    }

    // ── closest outline point ──

    #[test]
    fn closest_is_corner() {
        let p = polygon(&[(1.0, 1.0), (1.0, 2.0), (2.0, 2.0), (2.0, 1.0)]);
        let c = p.closest_outline_point(&Point2::new(0.0, 0.0)).unwrap();
        assert_eq!(c, Point2::new(1.0, 1.0));
    }

    #[test]
    fn closest_is_just_corner() {
        let p = polygon(&[(1.0, 1.0), (1.0, 2.0), (2.0, 2.0), (2.0, 1.0)]);
        let c = p.closest_outline_point(&Point2::new(0.0, 1.0)).unwrap();
        assert_relative_eq!(c, Point2::new(1.0, 1.0), epsilon = TOLERANCE);
    }

    #[test]
    fn closest_on_edge_between_corners() {
        let c = tall_rectangle()
            .closest_outline_point(&Point2::new(0.0, 2.0))
            .unwrap();
        assert_relative_eq!(c, Point2::new(1.0, 2.0), epsilon = TOLERANCE);
    }

    #[test]
    fn closest_on_edge_near_corner() {
        let c = tall_rectangle()
            .closest_outline_point(&Point2::new(0.0, 1.5))
            .unwrap();
        assert_relative_eq!(c, Point2::new(1.0, 1.5), epsilon = TOLERANCE);
    }

    #[test]
    fn closest_from_inside() {
        let c = tall_rectangle()
            .closest_outline_point(&Point2::new(1.2, 2.0))
            .unwrap();
        assert_relative_eq!(c, Point2::new(1.0, 2.0), epsilon = TOLERANCE);
    }

    #[test]
    fn closest_with_repeated_corner_fails() {
        let p = polygon(&[(1.0, 1.0), (1.0, 1.0), (3.0, 1.0), (2.0, 4.0)]);
        assert!(p.closest_outline_point(&Point2::new(1.0, 0.0)).is_err());
    }
}
