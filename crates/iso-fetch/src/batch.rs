//! Order-preserving batch partitioning over a [`TravelTimeSource`].

use std::time::Instant;

use iso_core::GeoPoint;
use tracing::info;

use crate::error::{FetchError, FetchResult};
use crate::osrm::MAX_TABLE_COORDS;
use crate::source::TravelTimeSource;

/// Splits a departure-coordinate sequence into consecutive batches that fit
/// the backend's per-request coordinate cap, issues one table query per
/// batch, and concatenates the durations back in original order.
///
/// Batches are strictly sequential: each query blocks until its response
/// arrives (or fails) before the next begins.  The first failing batch
/// aborts the whole fetch.
#[derive(Clone, Debug)]
pub struct BatchedFetcher {
    batch_size: usize,
}

impl Default for BatchedFetcher {
    fn default() -> Self {
        Self::new(MAX_TABLE_COORDS)
    }
}

impl BatchedFetcher {
    /// Create a fetcher issuing at most `batch_size` origins per query.
    ///
    /// # Panics
    /// Panics if `batch_size` is zero.
    pub fn new(batch_size: usize) -> Self {
        assert!(batch_size > 0, "batch size must be at least 1");
        Self { batch_size }
    }

    #[inline]
    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Fetch travel times for every origin, in origin order.
    ///
    /// The output length always equals `origins.len()`: every coordinate is
    /// covered exactly once, none skipped or duplicated across batch
    /// boundaries.  Per-batch progress (processed count, elapsed seconds)
    /// is emitted via `tracing` for observability only.
    pub fn fetch<S: TravelTimeSource + ?Sized>(
        &self,
        source: &S,
        origins: &[GeoPoint],
        destination: GeoPoint,
    ) -> FetchResult<Vec<Option<f64>>> {
        let total = origins.len();
        let mut durations = Vec::with_capacity(total);

        for (batch_idx, batch) in origins.chunks(self.batch_size).enumerate() {
            let started = Instant::now();
            let batch_durations = source.table(batch, destination)?;

            if batch_durations.len() != batch.len() {
                return Err(FetchError::ShapeMismatch {
                    expected: batch.len(),
                    got: batch_durations.len(),
                });
            }
            durations.extend(batch_durations);

            info!(
                batch = batch_idx,
                processed = durations.len(),
                total,
                elapsed_secs = started.elapsed().as_secs_f64(),
                "batch complete"
            );
        }

        Ok(durations)
    }
}
