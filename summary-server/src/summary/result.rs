//! A complete search-result summary.

use crate::domain::{DisplayLanguage, Leg};

use super::badge::{RouteBadge, route_badges};
use super::error::SummaryError;
use super::lookup::{RouteLookup, StopLookup};
use super::resolve::{StopSummary, resolve_stop_summary};
use super::time_report::{TimeReportTarget, time_report_targets};

/// Everything a search result displays about one itinerary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResultSummary {
    /// One badge per leg
    pub badges: Vec<RouteBadge>,
    /// Stop-to-stop chain with boarding fares
    pub stops: StopSummary,
    /// One arrival-time target per leg
    pub time_reports: Vec<TimeReportTarget>,
}

impl SearchResultSummary {
    /// Summarise one itinerary.
    ///
    /// `offsets` are the per-leg stop offsets for the arrival-time lookup
    /// (see [`time_report_targets`]).
    ///
    /// # Errors
    ///
    /// Fails with the first error from resolving the stops, building the
    /// badges, or building the time-report targets, in that order.
    pub fn build<R, S>(
        legs: &[Leg],
        offsets: Option<&[usize]>,
        routes: &R,
        stops: &S,
        language: &DisplayLanguage,
    ) -> Result<Self, SummaryError>
    where
        R: RouteLookup + ?Sized,
        S: StopLookup + ?Sized,
    {
        let summary = resolve_stop_summary(legs, routes, stops, language)?;
        let badges = route_badges(legs, routes)?;
        let time_reports = time_report_targets(legs, offsets)?;

        Ok(Self {
            badges,
            stops: summary,
            time_reports,
        })
    }

    /// The stop summary as display text.
    pub fn summary_text(&self) -> String {
        self.stops.to_string()
    }
}
