//! Domain types for search-result summaries.
//!
//! This module contains the validated model of the transit database:
//! routes with their stop-sequence variants and fares, stops with
//! localized names, and the legs of an itinerary. Identifier and
//! language types enforce their invariants at construction time.

mod ids;
mod language;
mod leg;
mod route;
mod stop;

pub use ids::{RouteId, StopId};
pub use language::{DisplayLanguage, InvalidLanguage, Language};
pub use leg::{Leg, StopIndex};
pub use route::{Fare, Fares, InvalidFareIndex, Route, Variant};
pub use stop::{LocalizedName, Stop};
