//! Stop-summary resolution.
//!
//! Turns the legs of an itinerary into the chain of stop names shown
//! under a search result: the boarding stop of every leg (with its fare,
//! when the route publishes one) followed by the alighting stop of the
//! last leg.
//!
//! Every leg position is read from its route's longest stop-sequence
//! variant (see [`Route::longest_variant`]).

use std::fmt;

use crate::domain::{DisplayLanguage, Fare, Leg, Route, StopId, StopIndex};

use super::error::{InvalidInputError, LookupError, SummaryError};
use super::lookup::{RouteLookup, StopLookup};

/// Separator between consecutive stops in a summary.
pub const STOP_SEPARATOR: &str = " → ";

/// One stop in a summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryStop {
    /// Stop id from the stop table
    pub stop_id: StopId,
    /// Display name in the resolved language
    pub name: String,
    /// Fare when boarding here; always `None` for the final stop
    pub fare: Option<Fare>,
}

impl fmt::Display for SummaryStop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if let Some(fare) = &self.fare {
            write!(f, " (${fare})")?;
        }
        Ok(())
    }
}

/// The resolved stops of an itinerary, in travel order.
///
/// # Invariants
///
/// - Holds exactly one more stop than the itinerary has legs
/// - Only the last stop is an alighting stop, and it never carries a fare
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopSummary {
    stops: Vec<SummaryStop>,
}

impl StopSummary {
    /// Returns the stops in travel order.
    pub fn stops(&self) -> &[SummaryStop] {
        &self.stops
    }

    /// Number of stops (legs + 1).
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// True if there are no stops.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }
}

impl fmt::Display for StopSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, stop) in self.stops.iter().enumerate() {
            if i > 0 {
                f.write_str(STOP_SEPARATOR)?;
            }
            write!(f, "{stop}")?;
        }
        Ok(())
    }
}

/// Boarding and alighting stops of one leg, checked against its route.
struct LegStops<'r> {
    route: &'r Route,
    board: &'r StopId,
    alight: &'r StopId,
}

/// Resolve the stops of an itinerary.
///
/// # Errors
///
/// - [`InvalidInputError::EmptyLegs`] if `legs` is empty
/// - [`InvalidInputError::NoStopVariants`] if a route has no stop sequences
/// - [`InvalidInputError::StopIndexOutOfBounds`] if any leg's `on` or `off`
///   is past the end of its route's longest variant
/// - [`LookupError`] if a route or stop is missing, or a stop has no name
///   in the requested or fallback language
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use indexmap::IndexMap;
/// use summary_server::domain::*;
/// use summary_server::summary::resolve_stop_summary;
///
/// let en = Language::english();
/// let mut stops = HashMap::new();
/// for (id, name) in [("S1", "Central"), ("S2", "Admiralty")] {
///     let name = LocalizedName::from_pairs([(en.clone(), name)]);
///     stops.insert(StopId::new(id), Stop::new(name));
/// }
///
/// let mut variants = IndexMap::new();
/// variants.insert("outbound".to_string(), vec![StopId::new("S1"), StopId::new("S2")]);
/// let route = Route::new("1", variants).with_fares(Fares::from_pairs([(0, Fare::new("4.7"))]));
/// let routes = HashMap::from([(RouteId::new("R1"), route)]);
///
/// let legs = [Leg::new(RouteId::new("R1"), 0, 1)];
/// let summary = resolve_stop_summary(&legs, &routes, &stops, &DisplayLanguage::default()).unwrap();
/// assert_eq!(summary.to_string(), "Central ($4.7) → Admiralty");
/// ```
pub fn resolve_stop_summary<R, S>(
    legs: &[Leg],
    routes: &R,
    stops: &S,
    language: &DisplayLanguage,
) -> Result<StopSummary, SummaryError>
where
    R: RouteLookup + ?Sized,
    S: StopLookup + ?Sized,
{
    if legs.is_empty() {
        return Err(InvalidInputError::EmptyLegs.into());
    }

    let resolved = legs
        .iter()
        .map(|leg| leg_stops(routes, leg))
        .collect::<Result<Vec<_>, _>>()?;

    let mut summary = Vec::with_capacity(legs.len() + 1);

    for (leg, leg_stops) in legs.iter().zip(&resolved) {
        summary.push(SummaryStop {
            stop_id: leg_stops.board.clone(),
            name: stop_name(stops, leg_stops.board, language)?,
            fare: leg_stops.route.fare_at(leg.on).cloned(),
        });
    }

    if let Some(last) = resolved.last() {
        summary.push(SummaryStop {
            stop_id: last.alight.clone(),
            name: stop_name(stops, last.alight, language)?,
            fare: None,
        });
    }

    Ok(StopSummary { stops: summary })
}

/// Resolve an itinerary straight to its display string.
///
/// Same as [`resolve_stop_summary`] followed by `to_string()`.
pub fn stop_summary_string<R, S>(
    legs: &[Leg],
    routes: &R,
    stops: &S,
    language: &DisplayLanguage,
) -> Result<String, SummaryError>
where
    R: RouteLookup + ?Sized,
    S: StopLookup + ?Sized,
{
    resolve_stop_summary(legs, routes, stops, language).map(|summary| summary.to_string())
}

fn leg_stops<'r, R>(routes: &'r R, leg: &Leg) -> Result<LegStops<'r>, SummaryError>
where
    R: RouteLookup + ?Sized,
{
    let route = routes
        .route(&leg.route_id)
        .ok_or_else(|| LookupError::Route(leg.route_id.clone()))?;

    let variant = route
        .longest_variant()
        .ok_or_else(|| InvalidInputError::NoStopVariants(leg.route_id.clone()))?;

    let checked = |index: StopIndex| {
        variant
            .stop_at(index)
            .ok_or_else(|| InvalidInputError::StopIndexOutOfBounds {
                route_id: leg.route_id.clone(),
                index,
                len: variant.len(),
            })
    };

    Ok(LegStops {
        route,
        board: checked(leg.on)?,
        alight: checked(leg.off)?,
    })
}

fn stop_name<S>(stops: &S, stop_id: &StopId, language: &DisplayLanguage) -> Result<String, LookupError>
where
    S: StopLookup + ?Sized,
{
    let stop = stops
        .stop(stop_id)
        .ok_or_else(|| LookupError::Stop(stop_id.clone()))?;

    stop.name
        .resolve(language)
        .map(str::to_string)
        .ok_or_else(|| LookupError::StopName {
            stop_id: stop_id.clone(),
            requested: language.requested.clone(),
            fallback: language.fallback.clone(),
        })
}
