use tracing::{debug, trace, warn};

use crate::error::{AlgorithmError, Result};
use crate::geometry::{Polygon, SupportFunction, Triangle};
use crate::math::projection_2d::perpendicular_foot_from_origin_2d;
use crate::math::triangle_2d::barycentric_2d;
use crate::math::{Point2, Vector2, VectorExt};

/// Default bound on the number of simplex updates per query.
pub const DEFAULT_MAX_ITERATIONS: usize = 64;

/// Parameters for the GJK intersection search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GjkParams {
    /// Maximum number of simplex updates before the search gives up.
    /// `None` lets the search run until it terminates on its own.
    pub max_iterations: Option<usize>,
    /// Stop with a touching contact when the search direction collapses to
    /// the zero vector. When off, the zero direction is handed to the
    /// support functions as is: polygons answer with their first corner,
    /// circles fail with `GeometryError::ZeroVector`.
    pub stop_on_zero_direction: bool,
}

impl Default for GjkParams {
    fn default() -> Self {
        Self {
            max_iterations: Some(DEFAULT_MAX_ITERATIONS),
            stop_on_zero_direction: true,
        }
    }
}

impl GjkParams {
    /// Parameters without an iteration bound.
    #[must_use]
    pub fn unbounded() -> Self {
        Self {
            max_iterations: None,
            ..Self::default()
        }
    }

    /// Parameters with the given iteration bound.
    #[must_use]
    pub fn with_max_iterations(max_iterations: usize) -> Self {
        Self {
            max_iterations: Some(max_iterations),
            ..Self::default()
        }
    }

    /// The classic search: no iteration bound and no early stop on a zero
    /// search direction.
    #[must_use]
    pub fn classic() -> Self {
        Self {
            max_iterations: None,
            stop_on_zero_direction: false,
        }
    }
}

/// Result of an intersection query.
#[derive(Debug, Clone, PartialEq)]
pub struct FigureIntersection {
    /// Whether the two figures overlap (touching counts).
    pub intersects: bool,
    /// The terminal simplex in Minkowski-difference space, if the search
    /// ended on one. Usually a triangle enclosing the origin; a four-point
    /// polygon when the search ended on an over-full simplex.
    pub witness: Option<Polygon>,
}

impl FigureIntersection {
    fn separated() -> Self {
        Self {
            intersects: false,
            witness: None,
        }
    }

    fn touching() -> Self {
        Self {
            intersects: true,
            witness: None,
        }
    }
}

/// Tests two convex figures for overlap with the GJK algorithm.
///
/// The search walks a simplex through the Minkowski difference
/// `figure1 - figure2` towards the origin, sampling it only through the two
/// figures' support points. The figures overlap iff the difference contains
/// the origin.
pub struct FigureIntersect<'a, A, B> {
    figure1: &'a A,
    figure2: &'a B,
    params: GjkParams,
}

impl<'a, A, B> FigureIntersect<'a, A, B>
where
    A: SupportFunction,
    B: SupportFunction,
{
    /// Creates a new `FigureIntersect` query with default parameters.
    #[must_use]
    pub fn new(figure1: &'a A, figure2: &'a B) -> Self {
        Self {
            figure1,
            figure2,
            params: GjkParams::default(),
        }
    }

    /// Sets custom search parameters.
    #[must_use]
    pub fn with_params(mut self, params: GjkParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the query.
    ///
    /// # Errors
    ///
    /// Returns `AlgorithmError::IterationLimitExceeded` if the search does not
    /// settle within `max_iterations`, or a geometry error if a support
    /// function rejects a search direction.
    pub fn execute(&self) -> Result<FigureIntersection> {
        let mut direction = Vector2::x();
        let mut simplex = Simplex::new(self.minkowski_support(&direction)?);
        let mut iteration = 0;

        loop {
            if let Some(limit) = self.params.max_iterations {
                if iteration >= limit {
                    warn!(limit, "GJK search hit the iteration limit");
                    return Err(AlgorithmError::IterationLimitExceeded { limit }.into());
                }
            }
            iteration += 1;

            direction = match simplex.evolve()? {
                Step::Search(next) => next,
                Step::Done(result) => {
                    debug!(iteration, intersects = result.intersects, "GJK search ended on simplex");
                    return Ok(result);
                }
            };
            trace!(
                iteration,
                simplex_size = simplex.len(),
                dx = direction.x,
                dy = direction.y,
                "GJK search direction"
            );

            if self.params.stop_on_zero_direction && direction == Vector2::zeros() {
                // The origin lies on the simplex itself.
                debug!(iteration, "GJK search found touching contact");
                return Ok(FigureIntersection::touching());
            }

            let next = self.minkowski_support(&direction)?;
            if next.coords.dot(&direction) < 0.0 {
                debug!(iteration, "GJK search found a separating direction");
                return Ok(FigureIntersection::separated());
            }
            simplex.push(next);
        }
    }

    /// Support point of `figure1 - figure2` along `direction`.
    fn minkowski_support(&self, direction: &Vector2) -> Result<Point2> {
        let support1 = self.figure1.support_point(direction)?;
        let support2 = self.figure2.support_point(&-direction)?;
        Ok(support1 - support2.coords)
    }
}

/// Tests two convex figures for overlap using default parameters.
///
/// # Errors
///
/// See [`FigureIntersect::execute`].
pub fn intersects<A, B>(figure1: &A, figure2: &B) -> Result<FigureIntersection>
where
    A: SupportFunction,
    B: SupportFunction,
{
    FigureIntersect::new(figure1, figure2).execute()
}

/// What the search does after a simplex update.
enum Step {
    Search(Vector2),
    Done(FigureIntersection),
}

/// Points of the Minkowski difference, oldest first.
struct Simplex {
    points: Vec<Point2>,
}

impl Simplex {
    fn new(first: Point2) -> Self {
        let mut points = Vec::with_capacity(4);
        points.push(first);
        Self { points }
    }

    fn len(&self) -> usize {
        self.points.len()
    }

    fn push(&mut self, point: Point2) {
        self.points.push(point);
    }

    /// Reduces the simplex to the feature closest to the origin and returns
    /// the next search direction, or ends the search.
    fn evolve(&mut self) -> Result<Step> {
        match *self.points.as_slice() {
            [p0] => Ok(Step::Search(-p0.coords)),
            [p0, p1] => {
                let backward = p0 - p1;
                let toward_origin = -p1.coords;
                if backward.is_within_90_degrees(&toward_origin) {
                    // The edge is the closest feature.
                    let foot = perpendicular_foot_from_origin_2d(&p0, &p1)?;
                    Ok(Step::Search(-foot.coords))
                } else {
                    // The newest point alone is closest; the old one is useless.
                    self.points.remove(0);
                    Ok(Step::Search(toward_origin))
                }
            }
            [p0, p1, p2] => {
                if encloses_origin(&p0, &p1, &p2) {
                    let witness = Triangle::new(p0, p1, p2).to_polygon();
                    return Ok(Step::Done(FigureIntersection {
                        intersects: true,
                        witness: Some(witness),
                    }));
                }
                // Continue from the newest edge.
                let foot = perpendicular_foot_from_origin_2d(&p1, &p2)?;
                Ok(Step::Search(-foot.coords))
            }
            [_, p1, p2, p3] => {
                // Only the newest three points are tested, and the search
                // ends whatever the outcome.
                let intersects = encloses_origin(&p1, &p2, &p3);
                Ok(Step::Done(FigureIntersection {
                    intersects,
                    witness: Some(Polygon::from_corners_unchecked(self.points.clone())),
                }))
            }
            _ => Err(AlgorithmError::UnexpectedSimplexSize(self.points.len()).into()),
        }
    }
}

/// Boundary-inclusive origin test. A flat triangle encloses nothing.
fn encloses_origin(a: &Point2, b: &Point2, c: &Point2) -> bool {
    barycentric_2d(a, b, c, &Point2::origin()).is_ok_and(|coords| coords.is_inside())
}
