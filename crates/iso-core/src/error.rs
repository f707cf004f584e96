//! Core error type.
//!
//! Sub-crates define their own error enums and convert them into
//! `iso_pipeline::PipelineError` via `From` impls at the orchestration seam,
//! so a caller can always tell bad input apart from bad network or bad
//! classification data.

use thiserror::Error;

/// Errors produced by grid validation and projector construction.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("grid resolution must be positive, got {0} km")]
    NonPositiveResolution(f64),

    #[error("grid resolution {resolution_km} km exceeds the {axis} half-width {half_width_km} km")]
    ResolutionExceedsWidth {
        resolution_km: f64,
        half_width_km: f64,
        axis: &'static str,
    },

    #[error("projection origin latitude {0}° is too close to a pole")]
    PolarOrigin(f64),

    #[error("field has {coords} coordinates but {times} travel times")]
    LengthMismatch { coords: usize, times: usize },
}

/// Shorthand result type for `iso-core`.
pub type CoreResult<T> = Result<T, CoreError>;
