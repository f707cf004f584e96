//! OSRM table-service client.
//!
//! Speaks the [OSRM `/table/v1` HTTP API][api]: all coordinates go on the
//! request path as `lon,lat` pairs, with the origins listed as `sources`
//! and the destination as the single `destinations` index.  The response
//! carries a durations matrix with one row per origin and one column per
//! destination; entry `[i][0]` is the travel time in seconds from origin
//! `i`, or `null` where the engine found no route.
//!
//! [api]: https://project-osrm.org/docs/v5.24.0/api/#table-service

use std::time::Duration;

use serde::Deserialize;

use iso_core::GeoPoint;

use crate::error::{FetchError, FetchResult};
use crate::source::TravelTimeSource;

/// Public OSRM demo server.
pub const DEFAULT_BASE_URL: &str = "https://router.project-osrm.org";

/// Hard cap on coordinates per table request imposed by the public server.
pub const MAX_TABLE_COORDS: usize = 150;

/// Per-request timeout.  Table queries for a full batch against the public
/// server are typically answered within a few seconds.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

// ── Response shape ────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub(crate) struct TableResponse {
    pub code: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub durations: Option<Vec<Vec<Option<f64>>>>,
}

// ── Client ────────────────────────────────────────────────────────────────────

/// Blocking OSRM table client for the `driving` profile.
pub struct OsrmTable {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl OsrmTable {
    /// Client against the public `router.project-osrm.org` server.
    pub fn new() -> FetchResult<Self> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Client against a custom OSRM server (e.g. a local instance).
    pub fn with_base_url(base_url: impl Into<String>) -> FetchResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { client, base_url: base_url.into() })
    }

    /// Request URL for one table query: origins first, destination last.
    pub(crate) fn table_url(&self, origins: &[GeoPoint], destination: GeoPoint) -> String {
        let mut coords = String::new();
        for o in origins {
            coords.push_str(&format!("{:.6},{:.6};", o.lon, o.lat));
        }
        coords.push_str(&format!("{:.6},{:.6}", destination.lon, destination.lat));

        let sources: Vec<String> = (0..origins.len()).map(|i| i.to_string()).collect();
        format!(
            "{}/table/v1/driving/{}?sources={}&destinations={}&annotations=duration",
            self.base_url,
            coords,
            sources.join(";"),
            origins.len()
        )
    }
}

/// Pull the single destination column out of a parsed response, checking
/// the matrix shape against the request.
pub(crate) fn extract_durations(
    response: TableResponse,
    origin_count: usize,
) -> FetchResult<Vec<Option<f64>>> {
    if response.code != "Ok" {
        return Err(FetchError::Service {
            code: response.code,
            message: response.message.unwrap_or_default(),
        });
    }

    let durations = response.durations.ok_or(FetchError::MissingDurations)?;
    if durations.len() != origin_count {
        return Err(FetchError::ShapeMismatch {
            expected: origin_count,
            got: durations.len(),
        });
    }

    durations
        .into_iter()
        .map(|row| match row.as_slice() {
            // Exactly the one destination column per origin row.
            [duration] => Ok(*duration),
            other => Err(FetchError::ShapeMismatch { expected: 1, got: other.len() }),
        })
        .collect()
}

impl TravelTimeSource for OsrmTable {
    fn table(
        &self,
        origins: &[GeoPoint],
        destination: GeoPoint,
    ) -> FetchResult<Vec<Option<f64>>> {
        if origins.is_empty() {
            return Ok(vec![]);
        }

        let url = self.table_url(origins, destination);
        let response: TableResponse = self
            .client
            .get(&url)
            .send()?
            .error_for_status()?
            .json()?;

        extract_durations(response, origins.len())
    }
}
