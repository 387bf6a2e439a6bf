//! Route types: stop-sequence variants and fares.

use std::collections::BTreeMap;
use std::fmt;

use indexmap::IndexMap;
use serde::Deserialize;

use super::{StopId, StopIndex};

/// A fare amount as printed in the database.
///
/// Amounts are kept as text so they display exactly as published
/// (`"4.7"`, `"12"`). Numeric JSON amounts are formatted with the
/// shortest representation (`2.5`, `3`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawFare")]
pub struct Fare(String);

impl Fare {
    /// Creates a fare from its display text.
    pub fn new(amount: impl Into<String>) -> Self {
        Fare(amount.into())
    }

    /// Returns the amount as text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Fare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawFare {
    Text(String),
    Amount(f64),
}

impl From<RawFare> for Fare {
    fn from(raw: RawFare) -> Self {
        match raw {
            RawFare::Text(text) => Fare(text),
            RawFare::Amount(amount) => Fare(amount.to_string()),
        }
    }
}

/// Error returned when a fare table has a key that isn't a stop index.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid fare index {key:?}: must be a non-negative integer")]
pub struct InvalidFareIndex {
    key: String,
}

/// Fares by boarding position.
///
/// Positions line up with the route's longest stop-sequence variant.
/// The database publishes fares as an array (with `null` where no fare
/// applies); an object keyed by position is also accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawFares")]
pub struct Fares(BTreeMap<usize, Fare>);

impl Fares {
    /// Builds a fare table from `(position, fare)` pairs.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (usize, Fare)>) -> Self {
        Fares(pairs.into_iter().collect())
    }

    /// Returns the fare when boarding at `index`, if one is published.
    pub fn at(&self, index: StopIndex) -> Option<&Fare> {
        self.0.get(&index.0)
    }

    /// Number of positions with a fare.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if no position has a fare.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawFares {
    List(Vec<Option<Fare>>),
    Map(BTreeMap<String, Option<Fare>>),
}

impl TryFrom<RawFares> for Fares {
    type Error = InvalidFareIndex;

    fn try_from(raw: RawFares) -> Result<Self, Self::Error> {
        match raw {
            RawFares::List(list) => Ok(Fares(
                list.into_iter()
                    .enumerate()
                    .filter_map(|(i, fare)| fare.map(|f| (i, f)))
                    .collect(),
            )),
            RawFares::Map(map) => {
                let mut fares = BTreeMap::new();
                for (key, fare) in map {
                    let index = key
                        .trim()
                        .parse::<usize>()
                        .map_err(|_| InvalidFareIndex { key: key.clone() })?;
                    if let Some(fare) = fare {
                        fares.insert(index, fare);
                    }
                }
                Ok(Fares(fares))
            }
        }
    }
}

/// One named stop sequence of a route (a direction or branch).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Variant<'a> {
    /// Key of the variant in the route's stop table
    pub key: &'a str,
    /// Stops in calling order
    pub stops: &'a [StopId],
}

impl<'a> Variant<'a> {
    /// Number of stops in the variant.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// True if the variant has no stops.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Returns the stop at `index`, if within the sequence.
    pub fn stop_at(&self, index: StopIndex) -> Option<&'a StopId> {
        self.stops.get(index.0)
    }
}

/// A route from the route table.
///
/// # Invariants
///
/// - `stops` keeps the variants in the order the database declares them;
///   that order breaks ties in [`Route::longest_variant`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    /// Route number shown on the badge (e.g. "1A")
    #[serde(default)]
    pub route: String,
    /// Service type code; "1" is the regular service
    #[serde(default = "regular_service_type")]
    pub service_type: String,
    /// Stop-sequence variants keyed by name, in declaration order
    pub stops: IndexMap<String, Vec<StopId>>,
    /// Fares by boarding position, when published
    #[serde(default)]
    pub fares: Option<Fares>,
}

fn regular_service_type() -> String {
    "1".to_string()
}

impl Route {
    /// Creates a regular-service route with no fares.
    pub fn new(route: impl Into<String>, stops: IndexMap<String, Vec<StopId>>) -> Self {
        Self {
            route: route.into(),
            service_type: regular_service_type(),
            stops,
            fares: None,
        }
    }

    /// Set the fare table.
    pub fn with_fares(mut self, fares: Fares) -> Self {
        self.fares = Some(fares);
        self
    }

    /// Set the service type code.
    pub fn with_service_type(mut self, service_type: impl Into<String>) -> Self {
        self.service_type = service_type.into();
        self
    }

    /// Returns the variant with the most stops.
    ///
    /// Ties go to the variant declared first. Leg positions are taken to
    /// be valid against this variant; the longest sequence is assumed to
    /// cover every position a route search can produce.
    ///
    /// Returns `None` if the route has no variants.
    ///
    /// # Examples
    ///
    /// ```
    /// use indexmap::IndexMap;
    /// use summary_server::domain::{Route, StopId};
    ///
    /// let ids = |xs: &[&str]| xs.iter().map(|s| StopId::new(*s)).collect::<Vec<_>>();
    /// let mut stops = IndexMap::new();
    /// stops.insert("inbound".to_string(), ids(&["A", "B", "C"]));
    /// stops.insert("outbound".to_string(), ids(&["A", "B", "C", "D", "E"]));
    ///
    /// let route = Route::new("1A", stops);
    /// assert_eq!(route.longest_variant().unwrap().key, "outbound");
    /// ```
    pub fn longest_variant(&self) -> Option<Variant<'_>> {
        self.stops
            .iter()
            .fold(None::<Variant<'_>>, |best, (key, stops)| match best {
                Some(best) if best.len() >= stops.len() => Some(best),
                _ => Some(Variant { key, stops }),
            })
    }

    /// Returns the fare when boarding at `index`.
    ///
    /// `None` if the route publishes no fares or none at that position.
    pub fn fare_at(&self, index: StopIndex) -> Option<&Fare> {
        self.fares.as_ref().and_then(|fares| fares.at(index))
    }

    /// True if this is a special departure (service type 2 or above).
    ///
    /// Only the leading digits of the code count; a code with none is a
    /// regular service.
    pub fn is_special_departure(&self) -> bool {
        let digits: String = self
            .service_type
            .trim()
            .chars()
            .take_while(char::is_ascii_digit)
            .collect();
        digits.parse::<u64>().is_ok_and(|code| code >= 2)
    }
}
