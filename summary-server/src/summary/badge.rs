//! Route badges shown in a search result's heading.

use crate::domain::{Leg, RouteId};

use super::error::{LookupError, SummaryError};
use super::lookup::RouteLookup;

/// The route number of one leg, flagged when it is a special departure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteBadge {
    /// Route the leg rides
    pub route_id: RouteId,
    /// Route number as printed on the vehicle
    pub route_no: String,
    /// True for special departures (service type 2 and above)
    pub special: bool,
}

/// Build one badge per leg, in travel order.
///
/// # Errors
///
/// Returns [`LookupError::Route`] if a leg's route is missing.
pub fn route_badges<R>(legs: &[Leg], routes: &R) -> Result<Vec<RouteBadge>, SummaryError>
where
    R: RouteLookup + ?Sized,
{
    legs.iter()
        .map(|leg| {
            let route = routes
                .route(&leg.route_id)
                .ok_or_else(|| LookupError::Route(leg.route_id.clone()))?;
            Ok(RouteBadge {
                route_id: leg.route_id.clone(),
                route_no: route.route.clone(),
                special: route.is_special_departure(),
            })
        })
        .collect()
}
