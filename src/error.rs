use thiserror::Error;

/// Top-level error type for the sightline crate.
#[derive(Debug, Error)]
pub enum SightlineError {
    #[error(transparent)]
    Profile(#[from] ProfileError),

    #[error(transparent)]
    Policy(#[from] PolicyError),
}

/// Errors raised while building a road profile.
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("{axis} coordinates need at least 2 points, got {count}")]
    TooFewVertices { axis: &'static str, count: usize },

    #[error("x and y coordinates must have the same length, got x={x}, y={y}")]
    LengthMismatch { x: usize, y: usize },

    #[error("{axis} coordinate at index {index} is not finite")]
    NonFinite { axis: &'static str, index: usize },

    #[error("invalid profile parameter: {0}")]
    InvalidParameter(String),
}

/// Errors raised while configuring ray presentation.
#[derive(Debug, Error)]
pub enum PolicyError {
    #[error("{parameter} = {value} must be finite and positive")]
    InvalidParameter { parameter: &'static str, value: f64 },
}

/// Convenience type alias for results using [`SightlineError`].
pub type Result<T> = std::result::Result<T, SightlineError>;
