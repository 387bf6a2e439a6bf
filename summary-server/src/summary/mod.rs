//! Search-result summaries.
//!
//! Given the legs of one itinerary and read-only route/stop tables, this
//! module builds what a search result shows: route badges, the stop
//! summary (`Star Ferry ($2.5) → Admiralty → Wan Chai`), and the
//! arrival-time lookup target of every leg. Everything here is a pure
//! function of its inputs.

mod badge;
mod error;
mod lookup;
mod resolve;
mod result;
mod time_report;

#[cfg(test)]
pub(crate) mod fixtures;

pub use badge::{RouteBadge, route_badges};
pub use error::{InvalidInputError, LookupError, SummaryError};
pub use lookup::{RouteLookup, StopLookup};
pub use resolve::{STOP_SEPARATOR, StopSummary, SummaryStop, resolve_stop_summary, stop_summary_string};
pub use result::SearchResultSummary;
pub use time_report::{TimeReportTarget, time_report_targets};
