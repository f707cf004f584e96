//! Travel-time samples and the aggregated field.
//!
//! # Design
//!
//! Reachability is a sum type rather than a magic negative number: a value
//! is either `Reachable(secs)` with `secs >= 0` or `Unreachable`.  The
//! numeric sentinel `-100.0` exists only at the serialization boundary
//! ([`TravelTime::as_secs`] / [`TravelTime::from_secs`]) so that persisted
//! data stays interchangeable with the historical array format.

use crate::error::{CoreError, CoreResult};
use crate::geo::GeoPoint;

// ── TravelTime ────────────────────────────────────────────────────────────────

/// Travel time from one grid point to the destination.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TravelTime {
    /// Routable point; duration in seconds, always non-negative.
    Reachable(f64),
    /// Water point, or a point the routing engine could not reach.
    Unreachable,
}

impl TravelTime {
    /// Serialized value marking an unreachable point.  Genuine travel times
    /// are never negative, so the marker is unambiguous.
    pub const SENTINEL_SECS: f64 = -100.0;

    /// Numeric encoding: the duration for reachable points, the sentinel
    /// otherwise.
    #[inline]
    pub fn as_secs(self) -> f64 {
        match self {
            TravelTime::Reachable(secs) => secs,
            TravelTime::Unreachable => Self::SENTINEL_SECS,
        }
    }

    /// Inverse of [`as_secs`](Self::as_secs): any negative value decodes as
    /// unreachable.
    #[inline]
    pub fn from_secs(secs: f64) -> Self {
        if secs < 0.0 {
            TravelTime::Unreachable
        } else {
            TravelTime::Reachable(secs)
        }
    }

    #[inline]
    pub fn is_reachable(self) -> bool {
        matches!(self, TravelTime::Reachable(_))
    }
}

// ── FieldSample / TravelTimeField ─────────────────────────────────────────────

/// One grid point's coordinate paired with its travel time.
///
/// Keeping the pair in a single record makes the index alignment between
/// coordinates and durations structural instead of a convention across
/// parallel arrays.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldSample {
    pub coord: GeoPoint,
    pub travel_time: TravelTime,
}

/// The complete travel-time field, in grid order.
///
/// Owned by the caller once returned from a pipeline run; a later grid
/// change does not invalidate it — callers re-run the pipeline and must not
/// reuse a stale field against a new grid.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TravelTimeField {
    destination: GeoPoint,
    samples: Vec<FieldSample>,
}

impl TravelTimeField {
    /// Zip aligned coordinate and travel-time sequences into a field.
    ///
    /// Fails with [`CoreError::LengthMismatch`] if the sequences disagree in
    /// length; this is the aggregation invariant, checked rather than
    /// assumed.
    pub fn assemble(
        destination: GeoPoint,
        coords: &[GeoPoint],
        times: &[TravelTime],
    ) -> CoreResult<Self> {
        if coords.len() != times.len() {
            return Err(CoreError::LengthMismatch {
                coords: coords.len(),
                times: times.len(),
            });
        }
        let samples = coords
            .iter()
            .zip(times)
            .map(|(&coord, &travel_time)| FieldSample { coord, travel_time })
            .collect();
        Ok(Self { destination, samples })
    }

    #[inline]
    pub fn destination(&self) -> GeoPoint {
        self.destination
    }

    #[inline]
    pub fn samples(&self) -> &[FieldSample] {
        &self.samples
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Samples still routable by road.
    pub fn reachable(&self) -> impl Iterator<Item = &FieldSample> {
        self.samples.iter().filter(|s| s.travel_time.is_reachable())
    }
}
