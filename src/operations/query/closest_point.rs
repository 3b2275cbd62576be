use crate::error::Result;
use crate::geometry::SupportFunction;
use crate::math::Point2;

/// Result of a closest outline point query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClosestOutlineResult {
    /// The point on the figure's boundary.
    pub point: Point2,
    /// The distance from the query position to `point`.
    pub distance: f64,
}

/// Finds the point on a figure's boundary nearest to a position.
pub struct ClosestOutlinePoint<'a, F> {
    figure: &'a F,
    position: Point2,
}

impl<'a, F: SupportFunction> ClosestOutlinePoint<'a, F> {
    /// Creates a new `ClosestOutlinePoint` query.
    #[must_use]
    pub fn new(figure: &'a F, position: Point2) -> Self {
        Self { figure, position }
    }

    /// Executes the query.
    ///
    /// Positions inside the figure are projected outwards onto the boundary
    /// as well.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ZeroVector` when querying a circle at its
    /// center, or `GeometryError::Degenerate` when the two polygon corners
    /// nearest to the position coincide.
    pub fn execute(&self) -> Result<ClosestOutlineResult> {
        let point = self.figure.closest_outline_point(&self.position)?;
        Ok(ClosestOutlineResult {
            point,
            distance: (self.position - point).norm(),
        })
    }
}

/// Shorthand returning only the boundary point of a [`ClosestOutlinePoint`]
/// query.
///
/// # Errors
///
/// See [`ClosestOutlinePoint::execute`].
pub fn closest_outline_point<F: SupportFunction>(figure: &F, position: Point2) -> Result<Point2> {
    Ok(ClosestOutlinePoint::new(figure, position).execute()?.point)
}
