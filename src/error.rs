use thiserror::Error;

/// Top-level error type for the cycloid crate.
#[derive(Debug, Error)]
pub enum CycloidError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Tessellation(#[from] TessellationError),
}

/// Invalid gear configurations, rejected before they reach the solver.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("pin count must be at least 2, got {0}")]
    InvalidPinCount(u32),

    #[error("pitch radius must be positive, got {0}")]
    NonPositiveRadius(f64),

    #[error("{parameter} must be non-negative, got {value}")]
    NegativeValue { parameter: &'static str, value: f64 },

    #[error("{parameter} must be finite")]
    NonFinite { parameter: &'static str },

    #[error("angle step must be positive, got {0}")]
    NonPositiveStep(f64),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("zero-length vector")]
    ZeroVector,
}

/// Errors related to tessellation.
#[derive(Debug, Error)]
pub enum TessellationError {
    #[error("invalid tessellation parameters: {0}")]
    InvalidParameters(String),
}

/// Convenience type alias for results using [`CycloidError`].
pub type Result<T> = std::result::Result<T, CycloidError>;
