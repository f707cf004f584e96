//! Fetch-subsystem error type.

use thiserror::Error;

/// Errors produced by `iso-fetch`.
///
/// A failed batch is not salvageable at this level: downstream alignment
/// assumes a complete, ordered result, so any variant here aborts the whole
/// fetch.  Retry, if wanted, is the caller's decision at batch granularity.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("routing service returned code {code}: {message}")]
    Service { code: String, message: String },

    #[error("response is missing the durations matrix")]
    MissingDurations,

    #[error("expected {expected} durations in batch, got {got}")]
    ShapeMismatch { expected: usize, got: usize },
}

pub type FetchResult<T> = Result<T, FetchError>;
