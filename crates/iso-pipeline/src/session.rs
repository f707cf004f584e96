//! One computation session: a destination plus its external capabilities.

use tracing::info;

use iso_classify::{classify, LandMask};
use iso_core::{GeoPoint, GridSpec, TravelTimeField};
use iso_fetch::{BatchedFetcher, TravelTimeSource};

use crate::error::PipelineResult;

/// A travel-time computation session for one fixed destination.
///
/// The destination is immutable for the session's lifetime; the grid
/// specification is *not* session state — it is passed to each [`run`]
/// call, which returns a fresh [`TravelTimeField`].  A field computed for
/// one spec must not be reused against another; re-run instead.
///
/// Sessions hold no locks and no shared mutable state.  A session is meant
/// to be exclusively owned by one caller for its duration; concurrent use
/// requires one session per caller.
///
/// [`run`]: Session::run
pub struct Session<'a> {
    destination: GeoPoint,
    source: &'a dyn TravelTimeSource,
    mask: &'a dyn LandMask,
    fetcher: BatchedFetcher,
}

impl<'a> Session<'a> {
    /// Create a session with the default batch cap.
    pub fn new(
        destination: GeoPoint,
        source: &'a dyn TravelTimeSource,
        mask: &'a dyn LandMask,
    ) -> Self {
        Self {
            destination,
            source,
            mask,
            fetcher: BatchedFetcher::default(),
        }
    }

    /// Override the batch partitioning, e.g. for a self-hosted routing
    /// server with a different per-request cap.
    pub fn with_fetcher(mut self, fetcher: BatchedFetcher) -> Self {
        self.fetcher = fetcher;
        self
    }

    #[inline]
    pub fn destination(&self) -> GeoPoint {
        self.destination
    }

    /// Compute the travel-time field for `spec`.
    ///
    /// Pure in its inputs apart from the external services: identical spec,
    /// destination, and service state yield an identical field.  Any stage
    /// failure aborts the run with the stage's distinct error.
    pub fn run(&self, spec: &GridSpec) -> PipelineResult<TravelTimeField> {
        let grid = spec.generate(self.destination)?;
        let coords = grid.coords();
        info!(points = coords.len(), destination = %self.destination, "grid generated");

        let raw = self.fetcher.fetch(self.source, &coords, self.destination)?;

        let times = classify(&coords, &raw, self.mask)?;
        let unreachable = times.iter().filter(|t| !t.is_reachable()).count();
        info!(unreachable, total = times.len(), "classification complete");

        // Lengths are equal by construction at this point; assemble checks
        // the aggregation invariant anyway.
        let field = TravelTimeField::assemble(self.destination, &coords, &times)?;
        Ok(field)
    }
}
