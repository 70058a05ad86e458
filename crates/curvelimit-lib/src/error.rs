use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the curvelimit library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when the curve is too tight for the wheelbase to admit a tire angle.
    #[error(
        "curve radius {curve_radius} m is too small for wheelbase {wheelbase} m \
         (radius must be at least half the wheelbase)"
    )]
    Domain { wheelbase: f64, curve_radius: f64 },

    /// Raised when an input value fails validation before reaching the evaluator.
    #[error("invalid {field}: {message}")]
    InvalidParameter { field: &'static str, message: String },

    /// Raised when a search was aborted by its cancellation callback.
    #[error("safe speed search cancelled after {iterations} iterations")]
    Cancelled { iterations: u32 },

    /// Raised when a vehicle configuration file cannot be read.
    #[error("failed to read vehicle configuration {path}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Raised when a vehicle configuration document is not valid JSON for the model.
    #[error("failed to parse vehicle configuration {}", display_source(.path))]
    ConfigParse {
        path: Option<PathBuf>,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    pub(crate) fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        Error::InvalidParameter {
            field,
            message: message.into(),
        }
    }
}

fn display_source(path: &Option<PathBuf>) -> String {
    match path {
        Some(path) => path.display().to_string(),
        None => "<inline>".to_string(),
    }
}
