use crate::geometry::{Circle, Figure, Polygon};
use crate::math::{Isometry2, Point2};

/// Values that can be moved by a rigid 2D transform.
pub trait Transform2d: Sized {
    /// Returns a copy of `self` moved by `isometry`.
    #[must_use]
    fn transformed(&self, isometry: &Isometry2) -> Self;
}

impl Transform2d for Point2 {
    fn transformed(&self, isometry: &Isometry2) -> Self {
        isometry.transform_point(self)
    }
}

impl Transform2d for Polygon {
    fn transformed(&self, isometry: &Isometry2) -> Self {
        self.map_corners(|corner| isometry.transform_point(corner))
    }
}

impl Transform2d for Circle {
    fn transformed(&self, isometry: &Isometry2) -> Self {
        self.with_center(isometry.transform_point(self.center()))
    }
}

impl Transform2d for Figure {
    fn transformed(&self, isometry: &Isometry2) -> Self {
        match self {
            Self::Circle(circle) => Self::Circle(circle.transformed(isometry)),
            Self::Polygon(polygon) => Self::Polygon(polygon.transformed(isometry)),
        }
    }
}

/// Applies an arbitrary rigid transform.
pub struct GeneralTransform {
    isometry: Isometry2,
}

impl GeneralTransform {
    /// Creates a new `GeneralTransform` operation.
    #[must_use]
    pub fn new(isometry: Isometry2) -> Self {
        Self { isometry }
    }

    /// Returns a transformed copy of `target`; polygon corner order is kept.
    #[must_use]
    pub fn execute<T: Transform2d>(&self, target: &T) -> T {
        target.transformed(&self.isometry)
    }

    /// Transforms a batch of points with the same isometry.
    #[must_use]
    pub fn execute_points(&self, points: &[Point2]) -> Vec<Point2> {
        points
            .iter()
            .map(|point| self.isometry.transform_point(point))
            .collect()
    }
}
