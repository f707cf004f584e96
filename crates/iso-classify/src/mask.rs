//! The `LandMask` trait and the polygon-dataset implementation.
//!
//! # Data layout
//!
//! `PolygonLandMask` holds every polygon ring (exteriors and holes alike)
//! as a flat list, with an R-tree over ring bounding boxes for candidate
//! lookup.  Containment uses the even-odd rule across all candidate rings:
//! a point inside an exterior but also inside a hole crosses two rings and
//! counts as water.  This avoids tracking exterior/hole pairing entirely.
//!
//! # Coverage
//!
//! A mask may be clipped to a region of interest at load time; rings whose
//! bounding box does not intersect the region are dropped.  Querying a
//! coordinate outside the declared region is an error, never a guess — an
//! incomplete mask must not silently bias the output.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use rstar::{RTree, RTreeObject, AABB};
use serde::Deserialize;
use tracing::info;

use iso_core::{BoundingBox, GeoPoint};

use crate::error::{ClassifyError, ClassifyResult};

// ── LandMask trait ────────────────────────────────────────────────────────────

/// Pluggable land/water lookup.
///
/// One operation: whether a coordinate lies on land.  A lookup that cannot
/// be answered must be an error; implementations never default unknown
/// coordinates to either class.
pub trait LandMask {
    fn is_land(&self, coord: GeoPoint) -> ClassifyResult<bool>;
}

// ── GeoJSON shapes ────────────────────────────────────────────────────────────

// Positions may carry an altitude third element; only lon/lat are read.
type Position = Vec<f64>;
type PolygonRings = Vec<Vec<Position>>;

#[derive(Debug, Deserialize)]
struct FeatureCollection {
    features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
struct Feature {
    geometry: Option<Geometry>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
enum Geometry {
    Polygon { coordinates: PolygonRings },
    MultiPolygon { coordinates: Vec<PolygonRings> },
    #[serde(other)]
    Unsupported,
}

// ── Ring storage + R-tree entry ───────────────────────────────────────────────

#[derive(Clone, Debug)]
struct Ring {
    points: Vec<GeoPoint>,
}

impl Ring {
    fn bbox(&self) -> BoundingBox {
        // Rings are never empty by construction.
        BoundingBox::of(&self.points).expect("ring with no points")
    }

    /// Even-odd ray cast: does a horizontal ray from `p` cross the ring an
    /// odd number of times?
    fn contains(&self, p: GeoPoint) -> bool {
        let pts = &self.points;
        let mut inside = false;
        let mut j = pts.len() - 1;
        for i in 0..pts.len() {
            let (a, b) = (pts[i], pts[j]);
            if (a.lat > p.lat) != (b.lat > p.lat) {
                let cross_lon = a.lon + (p.lat - a.lat) * (b.lon - a.lon) / (b.lat - a.lat);
                if p.lon < cross_lon {
                    inside = !inside;
                }
            }
            j = i;
        }
        inside
    }
}

/// Entry stored in the R-tree: a ring's bounding box with its index.
#[derive(Debug)]
struct RingEntry {
    envelope: AABB<[f64; 2]>,
    ring_idx: usize,
}

impl RTreeObject for RingEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        self.envelope
    }
}

// ── PolygonLandMask ───────────────────────────────────────────────────────────

/// Land mask backed by land polygons, e.g. an extract of the OSM land
/// polygons dataset in GeoJSON form.
#[derive(Debug)]
pub struct PolygonLandMask {
    rings: Vec<Ring>,
    index: RTree<RingEntry>,
    /// Region the mask is declared valid for; `None` means global.
    coverage: Option<BoundingBox>,
}

impl PolygonLandMask {
    /// Load land polygons from a GeoJSON `FeatureCollection` of `Polygon`
    /// and `MultiPolygon` features.
    ///
    /// With `clip` set, rings outside the region are discarded and lookups
    /// outside it fail with [`ClassifyError::OutOfCoverage`].  Clip to the
    /// grid bounding box plus a margin (see
    /// [`MASK_MARGIN_DEG`](crate::classify::MASK_MARGIN_DEG)) so boundary
    /// points never probe the edge of the dataset.
    pub fn from_geojson_path(path: &Path, clip: Option<BoundingBox>) -> ClassifyResult<Self> {
        let reader = BufReader::new(File::open(path)?);
        let collection: FeatureCollection = serde_json::from_reader(reader)
            .map_err(|e| ClassifyError::Dataset(e.to_string()))?;

        let mut rings = Vec::new();
        for feature in collection.features {
            match feature.geometry {
                Some(Geometry::Polygon { coordinates }) => {
                    collect_rings(&coordinates, &mut rings)?;
                }
                Some(Geometry::MultiPolygon { coordinates }) => {
                    for polygon in &coordinates {
                        collect_rings(polygon, &mut rings)?;
                    }
                }
                Some(Geometry::Unsupported) | None => {}
            }
        }

        let total = rings.len();
        let mask = Self::from_rings(rings, clip);
        info!(
            rings_loaded = total,
            rings_kept = mask.rings.len(),
            clipped = clip.is_some(),
            "land mask ready"
        );
        Ok(mask)
    }

    /// Build a mask from in-memory rings (each a closed lat/lon loop).
    /// Exterior and hole rings are treated uniformly under the even-odd
    /// rule.
    pub fn from_rings(rings: Vec<Vec<GeoPoint>>, clip: Option<BoundingBox>) -> Self {
        let rings: Vec<Ring> = rings
            .into_iter()
            .filter(|pts| pts.len() >= 3)
            .map(|points| Ring { points })
            .filter(|ring| match clip {
                Some(region) => intersects(ring.bbox(), region),
                None => true,
            })
            .collect();

        let index = RTree::bulk_load(
            rings
                .iter()
                .enumerate()
                .map(|(ring_idx, ring)| {
                    let b = ring.bbox();
                    RingEntry {
                        envelope: AABB::from_corners([b.min_lat, b.min_lon], [b.max_lat, b.max_lon]),
                        ring_idx,
                    }
                })
                .collect(),
        );

        Self { rings, index, coverage: clip }
    }

    /// Number of rings held after clipping.
    pub fn ring_count(&self) -> usize {
        self.rings.len()
    }
}

impl LandMask for PolygonLandMask {
    fn is_land(&self, coord: GeoPoint) -> ClassifyResult<bool> {
        if let Some(region) = self.coverage {
            if !region.contains(coord) {
                return Err(ClassifyError::OutOfCoverage(coord));
            }
        }

        let query = AABB::from_point([coord.lat, coord.lon]);
        let crossings = self
            .index
            .locate_in_envelope_intersecting(&query)
            .filter(|entry| self.rings[entry.ring_idx].contains(coord))
            .count();
        Ok(crossings % 2 == 1)
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn collect_rings(polygon: &PolygonRings, out: &mut Vec<Vec<GeoPoint>>) -> ClassifyResult<()> {
    for ring in polygon {
        let mut points = Vec::with_capacity(ring.len());
        for position in ring {
            match position.as_slice() {
                [lon, lat, ..] => points.push(GeoPoint::new(*lat, *lon)),
                short => {
                    return Err(ClassifyError::Dataset(format!(
                        "position with {} coordinates",
                        short.len()
                    )));
                }
            }
        }
        out.push(points);
    }
    Ok(())
}

fn intersects(a: BoundingBox, b: BoundingBox) -> bool {
    a.min_lat <= b.max_lat
        && a.max_lat >= b.min_lat
        && a.min_lon <= b.max_lon
        && a.max_lon >= b.min_lon
}
