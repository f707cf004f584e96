//! Classification-subsystem error type.

use thiserror::Error;

use iso_core::GeoPoint;

/// Errors produced by `iso-classify`.
///
/// An unavailable or incomplete mask is fatal for the run: defaulting an
/// unknown point to land or to water would silently bias the output.
#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error("expected {expected} raw durations for {expected} coordinates, got {got}")]
    LengthMismatch { expected: usize, got: usize },

    #[error("coordinate {0} is outside the mask's coverage region")]
    OutOfCoverage(GeoPoint),

    #[error("land-mask dataset error: {0}")]
    Dataset(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ClassifyResult<T> = Result<T, ClassifyError>;
