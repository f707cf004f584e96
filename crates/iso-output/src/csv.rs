//! CSV output backend.
//!
//! One row per grid point, in grid order:
//!
//! ```text
//! latitude_deg,longitude_deg,travel_time_secs
//! ```
//!
//! Unreachable points carry the `-100` sentinel in the duration column.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use iso_core::TravelTimeField;

use crate::writer::FieldWriter;
use crate::OutputResult;

/// Writes the travel-time field to `travel_time_field.csv` in `dir`.
pub struct CsvFieldWriter {
    rows: Writer<File>,
    finished: bool,
}

impl CsvFieldWriter {
    /// Open (or create) the CSV file in `dir` and write the header row.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut rows = Writer::from_path(dir.join("travel_time_field.csv"))?;
        rows.write_record(["latitude_deg", "longitude_deg", "travel_time_secs"])?;
        Ok(Self { rows, finished: false })
    }
}

impl FieldWriter for CsvFieldWriter {
    fn write(&mut self, field: &TravelTimeField) -> OutputResult<()> {
        for sample in field.samples() {
            self.rows.write_record(&[
                sample.coord.lat.to_string(),
                sample.coord.lon.to_string(),
                sample.travel_time.as_secs().to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.rows.flush()?;
        Ok(())
    }
}
