use crate::math::{Isometry2, Point2, Vector2};

use super::{GeneralTransform, Transform2d};

/// Translates a figure or point by an offset.
pub struct Translate {
    offset: Vector2,
}

impl Translate {
    /// Creates a new `Translate` operation.
    #[must_use]
    pub fn new(offset: Vector2) -> Self {
        Self { offset }
    }

    fn transform(&self) -> GeneralTransform {
        GeneralTransform::new(Isometry2::translation(self.offset.x, self.offset.y))
    }

    /// Returns a translated copy of `target`.
    #[must_use]
    pub fn execute<T: Transform2d>(&self, target: &T) -> T {
        self.transform().execute(target)
    }
}

/// Translates every point by `offset`.
#[must_use]
pub fn translate_points(points: &[Point2], offset: Vector2) -> Vec<Point2> {
    Translate::new(offset).transform().execute_points(points)
}
