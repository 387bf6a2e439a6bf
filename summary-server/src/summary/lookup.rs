//! Read-only access to the route and stop tables.
//!
//! The summary functions take these traits instead of a concrete table
//! so tests can pass plain maps and the server can pass a loaded
//! [`Dataset`](crate::dataset::Dataset) snapshot.

use std::collections::HashMap;

use crate::domain::{Route, RouteId, Stop, StopId};

/// Route table lookup.
pub trait RouteLookup {
    /// Returns the route with id `id`, if present.
    fn route(&self, id: &RouteId) -> Option<&Route>;
}

/// Stop table lookup.
pub trait StopLookup {
    /// Returns the stop with id `id`, if present.
    fn stop(&self, id: &StopId) -> Option<&Stop>;
}

impl RouteLookup for HashMap<RouteId, Route> {
    fn route(&self, id: &RouteId) -> Option<&Route> {
        self.get(id)
    }
}

impl StopLookup for HashMap<StopId, Stop> {
    fn stop(&self, id: &StopId) -> Option<&Stop> {
        self.get(id)
    }
}
