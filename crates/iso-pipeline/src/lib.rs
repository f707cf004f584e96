//! `iso-pipeline` — end-to-end travel-time field computation.
//!
//! A [`Session`] binds a destination to a routing source and a land mask,
//! and [`Session::run`] executes the full pipeline for one grid
//! specification:
//!
//! ```text
//! GridSpec ──generate──▶ coordinates ──batched fetch──▶ raw durations
//!            ──classify──▶ travel times ──assemble──▶ TravelTimeField
//! ```
//!
//! Everything runs strictly sequentially on the calling thread, batch by
//! batch; there is no pipelining, no parallel in-flight request, and no
//! cancellation short of dropping the call.  A session holds no mutable
//! state, so re-running with an unchanged spec against unchanged external
//! services yields an identical field.

pub mod error;
pub mod session;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{PipelineError, PipelineResult};
pub use session::Session;
