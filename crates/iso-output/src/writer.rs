//! The `FieldWriter` trait implemented by all backend writers.

use iso_core::TravelTimeField;

use crate::OutputResult;

/// Trait implemented by the CSV and GeoJSON writers.
pub trait FieldWriter {
    /// Write one complete field, preserving sample order.
    fn write(&mut self, field: &TravelTimeField) -> OutputResult<()>;

    /// Flush and close the underlying file.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
