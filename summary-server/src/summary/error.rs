//! Summary error types.
//!
//! Resolution fails rather than substituting blank text: a missing or
//! wrong stop name in an itinerary is worse than no summary at all.

use crate::domain::{Language, RouteId, StopId, StopIndex};

/// The itinerary itself is malformed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidInputError {
    /// No legs to summarise
    #[error("itinerary must have at least one leg")]
    EmptyLegs,

    /// The route has no stop-sequence variants to index into
    #[error("route {0} has no stop sequences")]
    NoStopVariants(RouteId),

    /// A boarding or alighting position is past the end of the route
    #[error("stop index {index} out of bounds for route {route_id} ({len} stops)")]
    StopIndexOutOfBounds {
        route_id: RouteId,
        index: StopIndex,
        len: usize,
    },

    /// The per-leg stop offsets don't match the legs
    #[error("expected {expected} stop offsets (one per leg), got {actual}")]
    OffsetCountMismatch { expected: usize, actual: usize },

    /// Boarding position plus stop offset doesn't fit in a stop index
    #[error("stop offset {offset} from index {on} overflows for route {route_id}")]
    StopOffsetOverflow {
        route_id: RouteId,
        on: StopIndex,
        offset: usize,
    },
}

/// A key referenced by the itinerary is missing from the database.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    /// Route id not in the route table
    #[error("route not found: {0}")]
    Route(RouteId),

    /// Stop id not in the stop table
    #[error("stop not found: {0}")]
    Stop(StopId),

    /// Stop has no name in the requested or fallback language
    #[error("stop {stop_id} has no name in {requested} or {fallback}")]
    StopName {
        stop_id: StopId,
        requested: Language,
        fallback: Language,
    },
}

/// Errors from building a search-result summary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SummaryError {
    #[error(transparent)]
    InvalidInput(#[from] InvalidInputError),

    #[error(transparent)]
    Lookup(#[from] LookupError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = InvalidInputError::EmptyLegs;
        assert_eq!(err.to_string(), "itinerary must have at least one leg");

        let err = InvalidInputError::NoStopVariants(RouteId::new("R1"));
        assert_eq!(err.to_string(), "route R1 has no stop sequences");

        let err = InvalidInputError::StopIndexOutOfBounds {
            route_id: RouteId::new("R1"),
            index: StopIndex(7),
            len: 5,
        };
        assert_eq!(
            err.to_string(),
            "stop index 7 out of bounds for route R1 (5 stops)"
        );

        let err = InvalidInputError::OffsetCountMismatch {
            expected: 2,
            actual: 1,
        };
        assert_eq!(
            err.to_string(),
            "expected 2 stop offsets (one per leg), got 1"
        );

        let err = InvalidInputError::StopOffsetOverflow {
            route_id: RouteId::new("R1"),
            on: StopIndex(1),
            offset: usize::MAX,
        };
        assert_eq!(
            err.to_string(),
            format!("stop offset {} from index 1 overflows for route R1", usize::MAX)
        );

        let err = LookupError::Route(RouteId::new("R9"));
        assert_eq!(err.to_string(), "route not found: R9");

        let err = LookupError::Stop(StopId::new("S9"));
        assert_eq!(err.to_string(), "stop not found: S9");

        let err = LookupError::StopName {
            stop_id: StopId::new("S1"),
            requested: Language::parse("fr").unwrap(),
            fallback: Language::english(),
        };
        assert_eq!(err.to_string(), "stop S1 has no name in fr or en");
    }

    #[test]
    fn summary_error_is_transparent() {
        let err: SummaryError = LookupError::Route(RouteId::new("R9")).into();
        assert_eq!(err.to_string(), "route not found: R9");

        let err: SummaryError = InvalidInputError::EmptyLegs.into();
        assert_eq!(err.to_string(), "itinerary must have at least one leg");
    }
}
