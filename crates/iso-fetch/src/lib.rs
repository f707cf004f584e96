//! `iso-fetch` — batched travel-time retrieval for the isofield pipeline.
//!
//! This is the only crate in the workspace that performs routing network
//! I/O.  The seam is the [`TravelTimeSource`] trait (one operation: a table
//! query from many origins to one destination), so the pipeline and its
//! tests run against deterministic in-memory sources; [`OsrmTable`] is the
//! production implementation against an OSRM HTTP server.
//!
//! [`BatchedFetcher`] sits above any source and handles the provider's
//! per-request coordinate cap: consecutive order-preserving batches, one
//! query each, strictly sequential, abort on first failure.

pub mod batch;
pub mod error;
pub mod osrm;
pub mod source;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use batch::BatchedFetcher;
pub use error::{FetchError, FetchResult};
pub use osrm::{OsrmTable, MAX_TABLE_COORDS};
pub use source::TravelTimeSource;
