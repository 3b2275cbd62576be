mod circle;
mod figure;
mod line;
mod polygon;
mod triangle;

pub use circle::Circle;
pub use figure::Figure;
pub use line::Line;
pub use polygon::Polygon;
pub use triangle::Triangle;

use crate::error::Result;
use crate::math::{Point2, Vector2};

/// Trait for convex figures that can answer extreme-point queries.
///
/// This is the capability the intersection search needs: it samples the
/// Minkowski difference of two figures purely through their support points.
pub trait SupportFunction {
    /// Returns the point of the figure's boundary that lies farthest along
    /// `direction`.
    ///
    /// # Errors
    ///
    /// Returns an error if the figure cannot resolve the direction (for
    /// example a zero direction for a circle).
    fn support_point(&self, direction: &Vector2) -> Result<Point2>;

    /// Returns the point of the figure's outline closest to `position`.
    ///
    /// # Errors
    ///
    /// Returns an error if the closest point is undefined for this input.
    fn closest_outline_point(&self, position: &Point2) -> Result<Point2>;
}
