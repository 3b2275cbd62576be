use crate::math::{Isometry2, Point2};

use super::{GeneralTransform, Transform2d};

/// Rotates a figure or point around a pivot.
pub struct Rotate {
    origin: Point2,
    angle: f64,
}

impl Rotate {
    /// Creates a new `Rotate` operation.
    ///
    /// * `origin` - Pivot of the rotation.
    /// * `angle` - Rotation angle in radians, counter-clockwise.
    #[must_use]
    pub fn new(origin: Point2, angle: f64) -> Self {
        Self { origin, angle }
    }

    fn transform(&self) -> GeneralTransform {
        // Translate to origin, rotate, translate back
        let to_origin = Isometry2::translation(-self.origin.x, -self.origin.y);
        let rotation = Isometry2::rotation(self.angle);
        let back = Isometry2::translation(self.origin.x, self.origin.y);
        GeneralTransform::new(back * rotation * to_origin)
    }

    /// Returns a rotated copy of `target`.
    #[must_use]
    pub fn execute<T: Transform2d>(&self, target: &T) -> T {
        self.transform().execute(target)
    }
}

/// Rotates every point around `origin` by `angle` radians, counter-clockwise.
///
/// The rotation is set up once for the whole batch.
#[must_use]
pub fn rotate_points(points: &[Point2], origin: Point2, angle: f64) -> Vec<Point2> {
    Rotate::new(origin, angle).transform().execute_points(points)
}
