//! Error types for the gridcollide crate

use thiserror::Error;

/// Main error type for the gridcollide crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("degenerate grid: size {size} is too small (need at least {minimum})")]
    DegenerateGrid { size: usize, minimum: usize },

    #[error(
        "infeasible placement: minimum distance {min_distance} exceeds the {grid_size}x{grid_size} grid diagonal {diagonal:.3}"
    )]
    InfeasibleConstraint {
        grid_size: usize,
        min_distance: f64,
        diagonal: f64,
    },

    #[error("coordinate ({row}, {col}) is outside a {grid_size}x{grid_size} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        grid_size: usize,
    },

    #[error("pursuit did not converge within {steps} steps")]
    DidNotConverge { steps: usize },

    #[error("avoidance run collided at step {step}")]
    AvoidanceCollision { step: usize },

    #[error("sample {index} was discarded {attempts} times in a row")]
    ResampleLimit { index: usize, attempts: usize },

    #[error("trajectory has no steps")]
    EmptyTrajectory,

    #[error("trajectory lengths differ: blue has {blue} points, red has {red}")]
    MismatchedTrajectories { blue: usize, red: usize },

    #[error("invalid trajectory text at byte {position}: {reason}")]
    ParseTrajectory { position: usize, reason: String },

    #[error("invalid collision label {value} (expected 0 or 1)")]
    InvalidLabel { value: u8 },

    #[error("invalid {kind} '{input}'. Expected one of: {expected}")]
    ParseEnum {
        kind: &'static str,
        input: String,
        expected: String,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("failed to {operation}: {message}")]
    SerializationContext { operation: String, message: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("progress bar template error: {message}")]
    ProgressBarTemplate { message: String },

    #[error("no dataset stored at '{path}'")]
    DatasetNotFound { path: String },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
