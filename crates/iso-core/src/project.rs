//! Local ellipsoidal projection: flat east/north offsets → latitude/longitude.
//!
//! # Approximation
//!
//! A full UTM or great-circle treatment is unnecessary for grids tens of
//! kilometers across: the local-radius approximation keeps the error far
//! below the grid resolution.  The meridional (`Rm`) and normal (`Rn`) radii
//! of curvature are computed once from the origin latitude:
//!
//! ```text
//! e² = 2f − f²
//! Rn = R / sqrt(1 − e²·sin²(lat₀))
//! Rm = Rn · (1 − e²) / (1 − e²·sin²(lat₀))
//! ```
//!
//! and each offset pair maps to angular deltas:
//!
//! ```text
//! Δlon = atan(1 / (Rn·cos(lat₀))) · east_m  · 180/π
//! Δlat = atan(1 / Rm)             · north_m · 180/π
//! ```
//!
//! The formula is undefined where `cos(lat₀)` vanishes, so construction
//! rejects near-polar origins outright rather than propagating NaN through
//! the whole grid.

use crate::error::{CoreError, CoreResult};
use crate::geo::GeoPoint;

/// WGS-84 equatorial radius in meters.
const EQUATORIAL_RADIUS_M: f64 = 6_378_136.6;

/// WGS-84 flattening.
const FLATTENING: f64 = 1.0 / 298.257_223_563;

/// Origins within this many degrees of a pole are rejected.
const POLAR_GUARD_DEG: f64 = 0.5;

/// Converts flat east/north offsets in meters around a fixed origin into
/// absolute geographic coordinates.
///
/// The per-meter angular rates are precomputed at construction, so
/// [`LocalProjector::project`] is two multiply-adds per point.
#[derive(Clone, Debug)]
pub struct LocalProjector {
    origin: GeoPoint,
    /// Degrees of longitude per meter east.
    deg_per_m_east: f64,
    /// Degrees of latitude per meter north.
    deg_per_m_north: f64,
}

impl LocalProjector {
    /// Build a projector centered on `origin`.
    ///
    /// Fails with [`CoreError::PolarOrigin`] for origins within 0.5° of a
    /// pole, where the longitude formula degenerates.
    pub fn new(origin: GeoPoint) -> CoreResult<Self> {
        if origin.lat.abs() >= 90.0 - POLAR_GUARD_DEG {
            return Err(CoreError::PolarOrigin(origin.lat));
        }

        let lat0 = origin.lat.to_radians();
        let e2 = 2.0 * FLATTENING - FLATTENING * FLATTENING;
        let denom = 1.0 - e2 * lat0.sin().powi(2);

        let rn = EQUATORIAL_RADIUS_M / denom.sqrt();
        let rm = rn * (1.0 - e2) / denom;

        Ok(Self {
            origin,
            deg_per_m_east: (1.0 / (rn * lat0.cos())).atan().to_degrees(),
            deg_per_m_north: (1.0 / rm).atan().to_degrees(),
        })
    }

    /// The origin this projector was built around.
    #[inline]
    pub fn origin(&self) -> GeoPoint {
        self.origin
    }

    /// Project one east/north offset pair (meters) to a geographic point.
    ///
    /// Projecting `(0.0, 0.0)` returns the origin exactly.
    #[inline]
    pub fn project(&self, east_m: f64, north_m: f64) -> GeoPoint {
        GeoPoint {
            lat: self.origin.lat + self.deg_per_m_north * north_m,
            lon: self.origin.lon + self.deg_per_m_east * east_m,
        }
    }
}
