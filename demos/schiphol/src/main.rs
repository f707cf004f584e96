//! schiphol — travel-time field around Amsterdam Schiphol.
//!
//! Computes car travel times from a 40 km grid of departure points to a
//! destination near Schiphol using the public OSRM server, marks
//! North Sea / IJsselmeer points unreachable via a land-polygon mask, and
//! writes the field as CSV and GeoJSON.
//!
//! Usage:
//!
//! ```text
//! schiphol <land-polygons.geojson> [output-dir]
//! ```
//!
//! The land-polygon file is a GeoJSON FeatureCollection covering at least
//! the grid area plus a 1° margin (e.g. an extract of the OSM land
//! polygons dataset).  Note the public OSRM server is rate limited; a full
//! 6561-point run issues 44 table requests.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use iso_classify::{PolygonLandMask, MASK_MARGIN_DEG};
use iso_core::{GeoPoint, GridSpec};
use iso_fetch::OsrmTable;
use iso_output::{CsvFieldWriter, FieldWriter, GeoJsonFieldWriter};
use iso_pipeline::Session;

// ── Constants ─────────────────────────────────────────────────────────────────

const DESTINATION: GeoPoint = GeoPoint { lat: 52.30977, lon: 4.76298 };
const EAST_WEST_KM:    f64 = 40.0;
const NORTH_SOUTH_KM:  f64 = 40.0;
const RESOLUTION_KM:   f64 = 1.0;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let land_path: PathBuf = args
        .next()
        .context("usage: schiphol <land-polygons.geojson> [output-dir]")?
        .into();
    let out_dir: PathBuf = args.next().map(Into::into).unwrap_or_else(|| ".".into());

    let spec = GridSpec::new(EAST_WEST_KM, NORTH_SOUTH_KM, RESOLUTION_KM);

    // Mask coverage: grid bounding box plus the standard margin.
    let region = spec
        .bounding_box(DESTINATION)?
        .expanded(MASK_MARGIN_DEG);
    let mask = PolygonLandMask::from_geojson_path(&land_path, Some(region))
        .with_context(|| format!("loading land polygons from {}", land_path.display()))?;

    let routing = OsrmTable::new()?;
    let session = Session::new(DESTINATION, &routing, &mask);

    println!(
        "Fetching travel times for {} grid points around {}...",
        spec.point_count(),
        DESTINATION
    );
    let field = session.run(&spec)?;

    write_outputs(&field, &out_dir)?;

    let unreachable = field.len() - field.reachable().count();
    println!(
        "Done: {} points ({} unreachable) written to {}",
        field.len(),
        unreachable,
        out_dir.display()
    );
    Ok(())
}

fn write_outputs(field: &iso_core::TravelTimeField, dir: &Path) -> Result<()> {
    let mut csv = CsvFieldWriter::new(dir)?;
    csv.write(field)?;
    csv.finish()?;

    let mut geojson = GeoJsonFieldWriter::new(dir);
    geojson.write(field)?;
    geojson.finish()?;
    Ok(())
}
