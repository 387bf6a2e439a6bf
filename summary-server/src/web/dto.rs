//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::dataset::DatasetInfo;
use crate::domain::Leg;
use crate::summary::{RouteBadge, SearchResultSummary, TimeReportTarget};

/// Request to summarise one search result.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResultRequest {
    /// Legs of the itinerary, in travel order
    pub legs: Vec<Leg>,

    /// Display language for stop names (defaults to the server default)
    pub language: Option<String>,

    /// Per-leg stop offsets for the arrival-time lookup
    pub stop_idx: Option<Vec<usize>>,
}

/// A route badge in a search result.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BadgeResult {
    /// Route id
    pub route_id: String,

    /// Route number
    pub route_no: String,

    /// Whether this is a special departure
    pub special: bool,
}

/// Where to look up arrival times for one leg.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeReportResult {
    /// Upper-cased route id
    pub route_id: String,

    /// Absolute boarding position
    pub seq: usize,
}

/// Response for a search-result summary.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResultResponse {
    /// One badge per leg
    pub badges: Vec<BadgeResult>,

    /// Stop-to-stop summary text
    pub summary: String,

    /// One arrival-time target per leg
    pub time_reports: Vec<TimeReportResult>,
}

/// Response describing the loaded dataset.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetInfoResponse {
    /// Number of routes
    pub routes: usize,

    /// Number of stops
    pub stops: usize,

    /// Load time (RFC 3339)
    pub loaded_at: String,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

// Conversion implementations

impl BadgeResult {
    /// Convert a domain badge to its response form.
    pub fn from_badge(badge: &RouteBadge) -> Self {
        Self {
            route_id: badge.route_id.to_string(),
            route_no: badge.route_no.clone(),
            special: badge.special,
        }
    }
}

impl TimeReportResult {
    /// Convert a time-report target to its response form.
    pub fn from_target(target: &TimeReportTarget) -> Self {
        Self {
            route_id: target.route_id.clone(),
            seq: target.seq.0,
        }
    }
}

impl SearchResultResponse {
    /// Convert a built summary to its response form.
    pub fn from_summary(summary: &SearchResultSummary) -> Self {
        Self {
            badges: summary.badges.iter().map(BadgeResult::from_badge).collect(),
            summary: summary.summary_text(),
            time_reports: summary
                .time_reports
                .iter()
                .map(TimeReportResult::from_target)
                .collect(),
        }
    }
}

impl DatasetInfoResponse {
    /// Convert snapshot info to its response form.
    pub fn from_info(info: &DatasetInfo) -> Self {
        Self {
            routes: info.routes,
            stops: info.stops,
            loaded_at: info.loaded_at.to_rfc3339(),
        }
    }
}
