//! Route/stop dataset snapshot.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::domain::{Route, RouteId, Stop, StopId};
use crate::summary::{RouteLookup, StopLookup};

use super::error::DatasetError;

/// The route and stop tables of the transit database.
///
/// Read from the database's JSON export:
///
/// ```json
/// {
///   "routeList": { "<route id>": { "route": "1A", "stops": { ... }, "fares": [...] } },
///   "stopList":  { "<stop id>": { "name": { "en": "...", "zh": "..." } } }
/// }
/// ```
///
/// Other top-level sections of the export are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    /// Routes keyed by id
    #[serde(default)]
    pub route_list: HashMap<RouteId, Route>,
    /// Stops keyed by id
    #[serde(default)]
    pub stop_list: HashMap<StopId, Stop>,
}

impl Dataset {
    /// Creates a dataset from prebuilt tables.
    pub fn new(route_list: HashMap<RouteId, Route>, stop_list: HashMap<StopId, Stop>) -> Self {
        Self {
            route_list,
            stop_list,
        }
    }

    /// Parse a dataset from JSON text.
    ///
    /// `path` is only used in error messages.
    pub fn from_json(json: &str, path: &Path) -> Result<Self, DatasetError> {
        serde_json::from_str(json).map_err(|e| DatasetError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Read and parse a dataset file.
    pub async fn read(path: &Path) -> Result<Self, DatasetError> {
        let json = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| DatasetError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        Self::from_json(&json, path)
    }

    /// Number of routes.
    pub fn route_count(&self) -> usize {
        self.route_list.len()
    }

    /// Number of stops.
    pub fn stop_count(&self) -> usize {
        self.stop_list.len()
    }
}

impl RouteLookup for Dataset {
    fn route(&self, id: &RouteId) -> Option<&Route> {
        self.route_list.get(id)
    }
}

impl StopLookup for Dataset {
    fn stop(&self, id: &StopId) -> Option<&Stop> {
        self.stop_list.get(id)
    }
}

/// A trimmed database export used across the crate's tests.
#[cfg(test)]
pub(crate) const SAMPLE: &str = r#"{
    "holidays": ["20240101"],
    "routeList": {
        "1+1+CHUK YUEN ESTATE+STAR FERRY": {
            "route": "1",
            "serviceType": "1",
            "co": ["kmb"],
            "bound": {"kmb": "O"},
            "stops": {
                "kmb": ["A1", "A2", "A3"]
            },
            "fares": ["6.4", "6.4", null]
        },
        "6+2+STANLEY+CENTRAL": {
            "route": "6",
            "serviceType": "2",
            "co": ["ctb"],
            "stops": {
                "ctb": ["A3", "B2"],
                "nlb": ["A3", "B2", "B3"]
            },
            "fares": null
        }
    },
    "stopList": {
        "A1": {"location": {"lat": 22.34, "lng": 114.2}, "name": {"en": "Chuk Yuen Estate", "zh": "竹園邨"}},
        "A2": {"name": {"en": "Wong Tai Sin", "zh": "黃大仙"}},
        "A3": {"name": {"en": "Central", "zh": "中環"}},
        "B2": {"name": {"en": "Aberdeen", "zh": "香港仔"}},
        "B3": {"name": {"en": "Stanley", "zh": "赤柱"}}
    }
}"#;
