use crate::error::Result;
use crate::math::{Point2, Vector2};

use super::{Circle, Polygon, SupportFunction};

/// A convex figure of any supported kind.
///
/// Use this when the figure kind is only known at runtime; code that knows
/// its figure types can use [`Circle`] and [`Polygon`] directly.
#[derive(Debug, Clone, PartialEq)]
pub enum Figure {
    Circle(Circle),
    Polygon(Polygon),
}

impl From<Circle> for Figure {
    fn from(circle: Circle) -> Self {
        Self::Circle(circle)
    }
}

impl From<Polygon> for Figure {
    fn from(polygon: Polygon) -> Self {
        Self::Polygon(polygon)
    }
}

impl SupportFunction for Figure {
    fn support_point(&self, direction: &Vector2) -> Result<Point2> {
        match self {
            Self::Circle(circle) => circle.support_point(direction),
            Self::Polygon(polygon) => polygon.support_point(direction),
        }
    }

    fn closest_outline_point(&self, position: &Point2) -> Result<Point2> {
        match self {
            Self::Circle(circle) => circle.closest_outline_point(position),
            Self::Polygon(polygon) => polygon.closest_outline_point(position),
        }
    }
}
