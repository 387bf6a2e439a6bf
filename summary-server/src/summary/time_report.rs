//! Arrival-time lookup targets.
//!
//! Each leg of an expanded search result shows the arrival times at its
//! boarding stop. The arrival-time lookup is keyed by the upper-cased
//! route id and the absolute position in the route's stop sequence; the
//! route search may report boarding positions relative to a sub-sequence,
//! in which case it supplies one offset per leg.

use crate::domain::{Leg, StopIndex};

use super::error::InvalidInputError;

/// Where to look up arrival times for one leg.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeReportTarget {
    /// Upper-cased route id
    pub route_id: String,
    /// Absolute boarding position (`on` plus the leg's offset)
    pub seq: StopIndex,
}

/// Build one arrival-time target per leg, in travel order.
///
/// `offsets`, when given, must have one entry per leg; a missing list
/// means every offset is zero.
///
/// # Errors
///
/// - [`InvalidInputError::OffsetCountMismatch`] if `offsets` has the
///   wrong length
/// - [`InvalidInputError::StopOffsetOverflow`] if a boarding position plus
///   its offset overflows
pub fn time_report_targets(
    legs: &[Leg],
    offsets: Option<&[usize]>,
) -> Result<Vec<TimeReportTarget>, InvalidInputError> {
    if let Some(offsets) = offsets
        && offsets.len() != legs.len()
    {
        return Err(InvalidInputError::OffsetCountMismatch {
            expected: legs.len(),
            actual: offsets.len(),
        });
    }

    legs.iter()
        .enumerate()
        .map(|(i, leg)| {
            let offset = offsets.map_or(0, |offsets| offsets[i]);
            let seq = leg.on.checked_offset_by(offset).ok_or_else(|| {
                InvalidInputError::StopOffsetOverflow {
                    route_id: leg.route_id.clone(),
                    on: leg.on,
                    offset,
                }
            });
            seq.map(|seq| TimeReportTarget {
                route_id: leg.route_id.to_uppercase(),
                seq,
            })
        })
        .collect()
}
