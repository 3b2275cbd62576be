pub mod intersect_2d;
pub mod polygon_2d;
pub mod projection_2d;
pub mod triangle_2d;

use crate::error::{GeometryError, Result};

/// 2D point type (absolute plane position).
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type (displacement or direction).
pub type Vector2 = nalgebra::Vector2<f64>;

/// 2D rigid transformation (rotation followed by translation).
pub type Isometry2 = nalgebra::Isometry2<f64>;

/// Geometric tolerance for approximate floating-point comparisons.
///
/// The kernel's own predicates (parallelism, segment bounds, barycentric
/// signs) compare exactly; this is only used where a caller asks for an
/// approximate answer.
pub const TOLERANCE: f64 = 1e-10;

/// Vector operations on [`Vector2`] that nalgebra does not name directly.
pub trait VectorExt {
    /// Rotates the vector 90 degrees counter-clockwise.
    #[must_use]
    fn left_perpendicular(&self) -> Vector2;

    /// Rotates the vector 90 degrees clockwise.
    #[must_use]
    fn right_perpendicular(&self) -> Vector2;

    /// 2D cross product `self.x * other.y - self.y * other.x`.
    #[must_use]
    fn cross_2d(&self, other: &Vector2) -> f64;

    /// Returns `true` when `other` points at most 90 degrees away from `self`
    /// (non-negative dot product).
    #[must_use]
    fn is_within_90_degrees(&self, other: &Vector2) -> bool;

    /// Returns the unit vector with the same direction.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ZeroVector` if the vector has zero length.
    fn checked_normalize(&self) -> Result<Vector2>;
}

impl VectorExt for Vector2 {
    fn left_perpendicular(&self) -> Vector2 {
        Vector2::new(-self.y, self.x)
    }

    fn right_perpendicular(&self) -> Vector2 {
        Vector2::new(self.y, -self.x)
    }

    fn cross_2d(&self, other: &Vector2) -> f64 {
        self.perp(other)
    }

    fn is_within_90_degrees(&self, other: &Vector2) -> bool {
        self.dot(other) >= 0.0
    }

    fn checked_normalize(&self) -> Result<Vector2> {
        let magnitude = self.norm();
        if magnitude == 0.0 || !magnitude.is_finite() {
            return Err(GeometryError::ZeroVector.into());
        }
        Ok(self / magnitude)
    }
}
