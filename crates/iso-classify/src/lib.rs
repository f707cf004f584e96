//! `iso-classify` — land/water classification for the isofield pipeline.
//!
//! Routing services return spurious finite or null durations for grid
//! points in open water (the query snaps to the nearest road).  This crate
//! corrects the raw duration sequence: every point that is not on land
//! becomes [`TravelTime::Unreachable`], independent of whatever the router
//! said about it.
//!
//! The seam is the [`LandMask`] trait (one operation: is this coordinate on
//! land?), so the pipeline tests against deterministic fakes.
//! [`PolygonLandMask`] is the dataset-backed implementation: land polygons
//! from a GeoJSON file, indexed with an `rstar` R-tree.
//!
//! [`TravelTime::Unreachable`]: iso_core::TravelTime::Unreachable

pub mod classify;
pub mod error;
pub mod mask;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use classify::{classify, MASK_MARGIN_DEG};
pub use error::{ClassifyError, ClassifyResult};
pub use mask::{LandMask, PolygonLandMask};
