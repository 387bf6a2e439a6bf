//! Route and stop identifier types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a route in the route table.
///
/// Route ids are opaque keys from the transit database (for example
/// `"1A+1+CHUK YUEN ESTATE+STAR FERRY"`). They are compared exactly;
/// only the time-report lookup upper-cases them.
///
/// # Examples
///
/// ```
/// use summary_server::domain::RouteId;
///
/// let id = RouteId::new("1a+1+chuk yuen");
/// assert_eq!(id.as_str(), "1a+1+chuk yuen");
/// assert_eq!(id.to_uppercase(), "1A+1+CHUK YUEN");
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteId(String);

impl RouteId {
    /// Wraps a raw route key.
    pub fn new(id: impl Into<String>) -> Self {
        RouteId(id.into())
    }

    /// Returns the route key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the upper-cased key used by the arrival-time lookup.
    pub fn to_uppercase(&self) -> String {
        self.0.to_uppercase()
    }
}

impl fmt::Debug for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RouteId({})", self.0)
    }
}

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a stop in the stop table.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StopId(String);

impl StopId {
    /// Wraps a raw stop key.
    pub fn new(id: impl Into<String>) -> Self {
        StopId(id.into())
    }

    /// Returns the stop key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StopId({})", self.0)
    }
}

impl fmt::Display for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
