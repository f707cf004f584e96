//! Pipeline error type: one variant family per failure class.
//!
//! The sub-crate enums are wrapped rather than flattened so a caller can
//! always distinguish "bad input" from "bad network" from "bad
//! classification data" with a single `match`, and still inspect the
//! underlying cause.

use thiserror::Error;

use iso_classify::ClassifyError;
use iso_core::CoreError;
use iso_fetch::FetchError;

/// Errors surfaced by a pipeline run.  Nothing is retried internally;
/// retry, if desired, belongs to the caller at batch-fetch granularity.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("grid specification or projection error: {0}")]
    Grid(#[from] CoreError),

    #[error("travel-time fetch failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("land/water classification failed: {0}")]
    Classify(#[from] ClassifyError),
}

pub type PipelineResult<T> = Result<T, PipelineError>;
