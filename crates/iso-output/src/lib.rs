//! `iso-output` — travel-time field writers.
//!
//! Two backends, both implementing [`FieldWriter`]:
//!
//! | Backend                | File                        | Consumer                     |
//! |------------------------|-----------------------------|------------------------------|
//! | [`CsvFieldWriter`]     | `travel_time_field.csv`     | later reuse / analysis       |
//! | [`GeoJsonFieldWriter`] | `travel_time_field.geojson` | map front ends (contour/heat)|
//!
//! Writers never reorder samples, and both encode unreachable points with
//! the numeric sentinel (`-100`) alongside — in GeoJSON — an explicit
//! `reachable` flag, so downstream renderers can key water on either.

pub mod csv;
pub mod error;
pub mod geojson;
pub mod writer;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use csv::CsvFieldWriter;
pub use error::{OutputError, OutputResult};
pub use geojson::GeoJsonFieldWriter;
pub use writer::FieldWriter;
