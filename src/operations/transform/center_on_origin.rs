use crate::error::Result;
use crate::geometry::Polygon;

use super::Translate;

/// Moves a polygon so that its centroid lands on the origin.
///
/// Used to derive a canonical outline that rotations can pivot around.
pub struct CenterOnOrigin<'a> {
    polygon: &'a Polygon,
}

impl<'a> CenterOnOrigin<'a> {
    /// Creates a new `CenterOnOrigin` operation.
    #[must_use]
    pub fn new(polygon: &'a Polygon) -> Self {
        Self { polygon }
    }

    /// Returns the centered polygon.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` if the polygon has zero area, since
    /// its centroid is undefined.
    pub fn execute(&self) -> Result<Polygon> {
        let centroid = self.polygon.centroid()?;
        Ok(Translate::new(-centroid.coords).execute(self.polygon))
    }
}
