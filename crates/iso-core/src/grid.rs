//! Grid specification and generation.
//!
//! A [`GridSpec`] is an immutable value; [`GridSpec::generate`] is a pure
//! function of the spec and the destination, so regenerating after a spec
//! change is simply a new call with a new value — there is no hidden
//! mutable grid state to invalidate.

use crate::error::{CoreError, CoreResult};
use crate::geo::{BoundingBox, GeoPoint};
use crate::project::LocalProjector;

// ── GridSpec ──────────────────────────────────────────────────────────────────

/// Dimensions of a rectangular grid centered on the destination.
///
/// Each axis spans every multiple of `resolution_km` from `-half_width` to
/// `+half_width` inclusive, so the axis point count is always odd and the
/// destination itself is the center node.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridSpec {
    /// Half-width of the grid in the east-west direction, km.
    pub east_west_km: f64,
    /// Half-width of the grid in the north-south direction, km.
    pub north_south_km: f64,
    /// Spacing between adjacent grid points, km.
    pub resolution_km: f64,
}

impl GridSpec {
    pub fn new(east_west_km: f64, north_south_km: f64, resolution_km: f64) -> Self {
        Self { east_west_km, north_south_km, resolution_km }
    }

    /// Reject non-positive resolutions and resolutions coarser than either
    /// half-width before any generation happens.
    pub fn validate(&self) -> CoreResult<()> {
        if self.resolution_km <= 0.0 {
            return Err(CoreError::NonPositiveResolution(self.resolution_km));
        }
        if self.resolution_km > self.east_west_km {
            return Err(CoreError::ResolutionExceedsWidth {
                resolution_km: self.resolution_km,
                half_width_km: self.east_west_km,
                axis: "east-west",
            });
        }
        if self.resolution_km > self.north_south_km {
            return Err(CoreError::ResolutionExceedsWidth {
                resolution_km: self.resolution_km,
                half_width_km: self.north_south_km,
                axis: "north-south",
            });
        }
        Ok(())
    }

    /// Steps from the center to the edge along one axis.
    #[inline]
    fn half_steps(half_width_km: f64, resolution_km: f64) -> i64 {
        (half_width_km / resolution_km).floor() as i64
    }

    /// Points along the east-west axis.
    pub fn east_count(&self) -> usize {
        (2 * Self::half_steps(self.east_west_km, self.resolution_km) + 1) as usize
    }

    /// Points along the north-south axis.
    pub fn north_count(&self) -> usize {
        (2 * Self::half_steps(self.north_south_km, self.resolution_km) + 1) as usize
    }

    /// Total point count of the generated grid.
    pub fn point_count(&self) -> usize {
        self.east_count() * self.north_count()
    }

    /// Generate the full grid around `destination`.
    ///
    /// Flattening order is row-major with **north varying slower and east
    /// varying faster**; downstream components rely only on this order being
    /// deterministic and stable, since travel times are re-associated with
    /// coordinates purely by positional index.
    pub fn generate(&self, destination: GeoPoint) -> CoreResult<Grid> {
        self.validate()?;
        let projector = LocalProjector::new(destination)?;

        let east_steps = Self::half_steps(self.east_west_km, self.resolution_km);
        let north_steps = Self::half_steps(self.north_south_km, self.resolution_km);
        let step_m = self.resolution_km * 1000.0;

        let mut points = Vec::with_capacity(self.point_count());
        for n in -north_steps..=north_steps {
            let north_m = n as f64 * step_m;
            for e in -east_steps..=east_steps {
                let east_m = e as f64 * step_m;
                points.push(GridPoint {
                    east_m,
                    north_m,
                    coord: projector.project(east_m, north_m),
                });
            }
        }

        Ok(Grid { destination, points })
    }

    /// Lat/lon bounding box of the grid this spec would generate, without
    /// generating it.  The grid is axis-aligned in offset space, so the box
    /// is spanned by the two extreme corners.
    pub fn bounding_box(&self, destination: GeoPoint) -> CoreResult<BoundingBox> {
        self.validate()?;
        let projector = LocalProjector::new(destination)?;

        let east_m = Self::half_steps(self.east_west_km, self.resolution_km) as f64
            * self.resolution_km
            * 1000.0;
        let north_m = Self::half_steps(self.north_south_km, self.resolution_km) as f64
            * self.resolution_km
            * 1000.0;

        let sw = projector.project(-east_m, -north_m);
        let ne = projector.project(east_m, north_m);
        Ok(BoundingBox {
            min_lat: sw.lat,
            max_lat: ne.lat,
            min_lon: sw.lon,
            max_lon: ne.lon,
        })
    }
}

// ── Grid ──────────────────────────────────────────────────────────────────────

/// One lattice node: the generating offsets and the projected coordinate.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridPoint {
    /// East offset from the destination, meters.
    pub east_m: f64,
    /// North offset from the destination, meters.
    pub north_m: f64,
    /// Projected geographic coordinate.
    pub coord: GeoPoint,
}

/// The generated lattice, in row-major order (north slow, east fast).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    destination: GeoPoint,
    points: Vec<GridPoint>,
}

impl Grid {
    /// The destination the grid is centered on.
    #[inline]
    pub fn destination(&self) -> GeoPoint {
        self.destination
    }

    /// All grid points in generation order.
    #[inline]
    pub fn points(&self) -> &[GridPoint] {
        &self.points
    }

    /// Number of grid points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The projected coordinates only, in grid order.
    pub fn coords(&self) -> Vec<GeoPoint> {
        self.points.iter().map(|p| p.coord).collect()
    }
}
