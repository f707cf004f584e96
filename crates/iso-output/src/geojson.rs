//! GeoJSON output backend.
//!
//! Emits a `FeatureCollection` of point features, one per grid point in
//! grid order, with `travel_time_secs` and `reachable` properties plus a
//! `destination` foreign member, for map front ends that render the
//! contour or heat overlay.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde_json::json;

use iso_core::TravelTimeField;

use crate::writer::FieldWriter;
use crate::OutputResult;

/// Writes the travel-time field to `travel_time_field.geojson` in `dir`.
pub struct GeoJsonFieldWriter {
    path: PathBuf,
    finished: bool,
}

impl GeoJsonFieldWriter {
    pub fn new(dir: &Path) -> Self {
        Self {
            path: dir.join("travel_time_field.geojson"),
            finished: false,
        }
    }
}

impl FieldWriter for GeoJsonFieldWriter {
    fn write(&mut self, field: &TravelTimeField) -> OutputResult<()> {
        let features: Vec<_> = field
            .samples()
            .iter()
            .map(|sample| {
                json!({
                    "type": "Feature",
                    "geometry": {
                        "type": "Point",
                        "coordinates": [sample.coord.lon, sample.coord.lat],
                    },
                    "properties": {
                        "travel_time_secs": sample.travel_time.as_secs(),
                        "reachable": sample.travel_time.is_reachable(),
                    },
                })
            })
            .collect();

        let collection = json!({
            "type": "FeatureCollection",
            "destination": [field.destination().lon, field.destination().lat],
            "features": features,
        });

        let mut writer = BufWriter::new(File::create(&self.path)?);
        serde_json::to_writer(&mut writer, &collection)?;
        writer.flush()?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        // write() flushes per call; finish only marks completion.
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        Ok(())
    }
}
