//! The classification pass: raw durations → corrected travel times.

use iso_core::{GeoPoint, TravelTime};

use crate::error::{ClassifyError, ClassifyResult};
use crate::mask::LandMask;

/// Margin in degrees by which the mask's coverage region should exceed the
/// grid bounding box on every side, so lookups never land exactly on the
/// region boundary.
pub const MASK_MARGIN_DEG: f64 = 1.0;

/// Correct a raw duration sequence against a land mask.
///
/// `coords` and `raw` must be index-aligned and equal in length.  Each
/// point is classified independently, purely from its coordinate:
///
/// - water → [`TravelTime::Unreachable`], regardless of the raw duration
///   (routing services return spurious values for off-road points);
/// - land with a duration → [`TravelTime::Reachable`];
/// - land where the router found no route → [`TravelTime::Unreachable`].
///
/// A failed mask lookup aborts the pass; there is no land-or-water default.
pub fn classify(
    coords: &[GeoPoint],
    raw: &[Option<f64>],
    mask: &dyn LandMask,
) -> ClassifyResult<Vec<TravelTime>> {
    if coords.len() != raw.len() {
        return Err(ClassifyError::LengthMismatch {
            expected: coords.len(),
            got: raw.len(),
        });
    }

    coords
        .iter()
        .zip(raw)
        .map(|(&coord, &duration)| {
            if !mask.is_land(coord)? {
                return Ok(TravelTime::Unreachable);
            }
            Ok(match duration {
                Some(secs) => TravelTime::from_secs(secs),
                None => TravelTime::Unreachable,
            })
        })
        .collect()
}
