//! The `TravelTimeSource` trait implemented by routing backends.

use iso_core::GeoPoint;

use crate::FetchResult;

/// Pluggable travel-time backend.
///
/// One operation: a table query returning the travel duration in seconds
/// from each origin to the single destination, one entry per origin, in
/// origin order.  `None` means the backend found no route for that origin;
/// genuine durations are always non-negative.
///
/// Implementations must respect request ordering — the pipeline
/// re-associates durations with coordinates purely by positional index.
pub trait TravelTimeSource {
    /// Query travel times from every origin to `destination`.
    ///
    /// The returned vector must have exactly `origins.len()` entries; the
    /// caller treats any other shape as a fatal fetch failure.
    fn table(
        &self,
        origins: &[GeoPoint],
        destination: GeoPoint,
    ) -> FetchResult<Vec<Option<f64>>>;
}
