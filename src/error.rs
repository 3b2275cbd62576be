use thiserror::Error;

/// Top-level error type for the gjk2d kernel.
#[derive(Debug, Error)]
pub enum Gjk2dError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Algorithm(#[from] AlgorithmError),
}

/// Errors related to geometric inputs and computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("polygon needs at least 3 corners, got {count}")]
    TooFewCorners { count: usize },

    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("zero-length vector")]
    ZeroVector,
}

/// Errors raised by the intersection search itself.
#[derive(Debug, Error)]
pub enum AlgorithmError {
    #[error("simplex holds an unexpected number of points: {0}")]
    UnexpectedSimplexSize(usize),

    #[error("intersection search inconclusive after {limit} iterations")]
    IterationLimitExceeded { limit: usize },
}

/// Convenience type alias for results using [`Gjk2dError`].
pub type Result<T> = std::result::Result<T, Gjk2dError>;
