//! `iso-core` — foundational types for the isofield travel-time pipeline.
//!
//! This crate is a dependency of every other `iso-*` crate.  It performs no
//! I/O and has minimal external dependencies (only `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                               |
//! |-------------|--------------------------------------------------------|
//! | [`geo`]     | `GeoPoint`, `BoundingBox`                              |
//! | [`project`] | `LocalProjector` — flat offsets → latitude/longitude   |
//! | [`grid`]    | `GridSpec`, `Grid`, `GridPoint`                        |
//! | [`field`]   | `TravelTime`, `FieldSample`, `TravelTimeField`         |
//! | [`error`]   | `CoreError`, `CoreResult`                              |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                    |
//! |---------|-----------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.       |

pub mod error;
pub mod field;
pub mod geo;
pub mod grid;
pub mod project;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use field::{FieldSample, TravelTime, TravelTimeField};
pub use geo::{BoundingBox, GeoPoint};
pub use grid::{Grid, GridPoint, GridSpec};
pub use project::LocalProjector;
