use crate::error::{GeometryError, Result};
use crate::math::{Point2, Vector2, VectorExt};

use super::SupportFunction;

/// A circle in the plane, defined by a center and a radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    center: Point2,
    radius: f64,
}

impl Circle {
    /// Creates a new circle.
    ///
    /// A zero radius is accepted; the circle then behaves like its center.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ParameterOutOfRange` if the radius is negative
    /// or not finite.
    pub fn new(center: Point2, radius: f64) -> Result<Self> {
        if !(radius >= 0.0 && radius.is_finite()) {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "radius",
                value: radius,
                min: 0.0,
                max: f64::INFINITY,
            }
            .into());
        }
        Ok(Self { center, radius })
    }

    /// Returns the center of the circle.
    #[must_use]
    pub fn center(&self) -> &Point2 {
        &self.center
    }

    /// Returns the radius of the circle.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns a circle with the same radius around a new center.
    #[must_use]
    pub(crate) fn with_center(&self, center: Point2) -> Self {
        Self {
            center,
            radius: self.radius,
        }
    }
}

impl SupportFunction for Circle {
    fn support_point(&self, direction: &Vector2) -> Result<Point2> {
        let unit = direction.checked_normalize()?;
        Ok(self.center + unit * self.radius)
    }

    /// Same as the support point in the direction from the center to
    /// `position`. Fails when `position` is the center itself.
    fn closest_outline_point(&self, position: &Point2) -> Result<Point2> {
        self.support_point(&(position - self.center))
    }
}
