use crate::error::{GeometryError, Result};
use crate::math::intersect_2d::{
    line_line_intersect_2d, lines_parallel_2d, segment_segment_intersect_2d,
};
use crate::math::projection_2d::perpendicular_foot_2d;
use crate::math::{Point2, Vector2};

/// A line through two points.
///
/// Depending on the query it is read as the infinite line through both
/// points or as the segment between them. The line is degenerate when the
/// two points coincide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    point1: Point2,
    point2: Point2,
}

impl Line {
    /// Creates a new line through `point1` and `point2`.
    #[must_use]
    pub fn new(point1: Point2, point2: Point2) -> Self {
        Self { point1, point2 }
    }

    /// Returns the first defining point.
    #[must_use]
    pub fn point1(&self) -> &Point2 {
        &self.point1
    }

    /// Returns the second defining point.
    #[must_use]
    pub fn point2(&self) -> &Point2 {
        &self.point2
    }

    /// Returns the (non-normalized) direction `point2 - point1`.
    #[must_use]
    pub fn direction(&self) -> Vector2 {
        self.point2 - self.point1
    }

    /// Returns whether both defining points coincide.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.point1 == self.point2
    }

    /// Returns whether this line and `other` are exactly parallel.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` if either line is degenerate.
    pub fn is_parallel_to(&self, other: &Line) -> Result<bool> {
        check_lines(self, other)?;
        Ok(lines_parallel_2d(&self.point1, &self.point2, &other.point1, &other.point2))
    }

    /// Intersection of the two infinite lines, `None` if parallel.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` if either line is degenerate.
    pub fn intersection(&self, other: &Line) -> Result<Option<Point2>> {
        check_lines(self, other)?;
        Ok(line_line_intersect_2d(&self.point1, &self.point2, &other.point1, &other.point2))
    }

    /// Intersection of the two segments, end points included.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` if either line is degenerate.
    pub fn segment_intersection(&self, other: &Line) -> Result<Option<Point2>> {
        check_lines(self, other)?;
        Ok(segment_segment_intersect_2d(
            &self.point1,
            &self.point2,
            &other.point1,
            &other.point2,
        ))
    }

    /// Foot of the perpendicular from `point` onto the infinite line.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` if the line is degenerate.
    pub fn perpendicular_foot(&self, point: &Point2) -> Result<Point2> {
        perpendicular_foot_2d(&self.point1, &self.point2, point)
    }
}

fn check_lines(a: &Line, b: &Line) -> Result<()> {
    if a.is_degenerate() || b.is_degenerate() {
        return Err(GeometryError::Degenerate("line through coincident points".into()).into());
    }
    Ok(())
}
