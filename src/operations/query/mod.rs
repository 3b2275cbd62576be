mod closest_point;
mod intersect;
mod support_point;

pub use closest_point::{closest_outline_point, ClosestOutlinePoint, ClosestOutlineResult};
pub use intersect::{
    intersects, FigureIntersect, FigureIntersection, GjkParams, DEFAULT_MAX_ITERATIONS,
};
pub use support_point::{support_point, SupportPoint};
