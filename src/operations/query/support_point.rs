use crate::error::Result;
use crate::geometry::SupportFunction;
use crate::math::{Point2, Vector2};

/// Finds the point of a figure that lies furthest along a direction.
pub struct SupportPoint<'a, F> {
    figure: &'a F,
    direction: Vector2,
}

impl<'a, F: SupportFunction> SupportPoint<'a, F> {
    /// Creates a new `SupportPoint` query.
    #[must_use]
    pub fn new(figure: &'a F, direction: Vector2) -> Self {
        Self { figure, direction }
    }

    /// Executes the query.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ZeroVector` for a circle queried with a zero
    /// direction.
    pub fn execute(&self) -> Result<Point2> {
        self.figure.support_point(&self.direction)
    }
}

/// Shorthand for `SupportPoint::new(figure, direction).execute()`.
///
/// # Errors
///
/// See [`SupportPoint::execute`].
pub fn support_point<F: SupportFunction>(figure: &F, direction: Vector2) -> Result<Point2> {
    SupportPoint::new(figure, direction).execute()
}
