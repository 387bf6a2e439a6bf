//! Itinerary leg type.
//!
//! A `Leg` is one ride on a single route, from a boarding stop to an
//! alighting stop. Stops are addressed by position within the route's
//! stop sequence, not by stop id, because a route may call at the same
//! stop more than once.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::RouteId;

/// Position of a stop within a route's stop sequence.
///
/// # Examples
///
/// ```
/// use summary_server::domain::StopIndex;
///
/// let idx = StopIndex(2);
/// assert_eq!(idx.checked_offset_by(3), Some(StopIndex(5)));
/// assert_eq!(idx.checked_offset_by(usize::MAX), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StopIndex(pub usize);

impl StopIndex {
    /// Returns the index shifted forward by `offset` positions, or `None`
    /// on overflow.
    pub fn checked_offset_by(self, offset: usize) -> Option<Self> {
        self.0.checked_add(offset).map(StopIndex)
    }
}

impl fmt::Display for StopIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for StopIndex {
    fn from(value: usize) -> Self {
        StopIndex(value)
    }
}

impl From<StopIndex> for usize {
    fn from(value: StopIndex) -> Self {
        value.0
    }
}

/// A leg of an itinerary (one route).
///
/// Legs arrive from the route search already in travel order. Indices
/// are not checked here; they are checked against the route's stop
/// sequence when the itinerary is summarised.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Leg {
    /// Route ridden on this leg
    pub route_id: RouteId,
    /// Boarding position in the route's stop sequence
    pub on: StopIndex,
    /// Alighting position in the route's stop sequence
    pub off: StopIndex,
}

impl Leg {
    /// Creates a leg.
    ///
    /// # Examples
    ///
    /// ```
    /// use summary_server::domain::{Leg, RouteId, StopIndex};
    ///
    /// let leg = Leg::new(RouteId::new("R1"), 0, 4);
    /// assert_eq!(leg.on, StopIndex(0));
    /// assert_eq!(leg.off, StopIndex(4));
    /// ```
    pub fn new(route_id: RouteId, on: usize, off: usize) -> Self {
        Self {
            route_id,
            on: StopIndex(on),
            off: StopIndex(off),
        }
    }
}
