//! Intersection tests for convex 2D figures.
//!
//! Figures ([`Circle`], [`Polygon`], or the runtime-tagged [`Figure`]) expose
//! their shape through [`SupportFunction`]; [`intersects`] runs the GJK
//! search on any two of them.

pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;

pub use error::{Gjk2dError, Result};
pub use geometry::{Circle, Figure, Line, Polygon, SupportFunction, Triangle};
pub use math::{Point2, Vector2};
pub use operations::query::{intersects, FigureIntersection};
