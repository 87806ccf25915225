//! Record-level scope predicate: optional date bounds and an optional tag set.

use crate::config::FilterCriteria;
use crate::record::Record;
use time::PrimitiveDateTime;

/// Decide whether `record` is in scope for `criteria`.
///
/// - no bounds, no tags: accept everything, even without a timestamp
/// - tags only: accept iff any tag matches; the timestamp is never read
/// - any bound set: the timestamp must parse, then `date_bounds_ok` and the
///   tag check (vacuous when the tag set is empty) must both hold
pub fn accept(record: &Record, criteria: &FilterCriteria) -> bool {
    if criteria.is_unrestricted() {
        return true;
    }
    if !criteria.has_date_bounds() {
        return has_matching_tag(record, criteria);
    }
    let Some(ts) = record.timestamp() else {
        return false;
    };
    let tags_ok = criteria.tags.is_empty() || has_matching_tag(record, criteria);
    date_bounds_ok(ts, criteria.start, criteria.end) && tags_ok
}

/// Passes when EITHER present bound is satisfied (start OR end), not both.
/// With `start > end` this accepts dates on either side of the gap.
/// Switching to an AND of the bounds is a change to this one expression.
pub fn date_bounds_ok(
    ts: PrimitiveDateTime,
    start: Option<PrimitiveDateTime>,
    end: Option<PrimitiveDateTime>,
) -> bool {
    start.is_some_and(|s| ts >= s) || end.is_some_and(|e| ts <= e)
}

pub fn has_matching_tag(record: &Record, criteria: &FilterCriteria) -> bool {
    record.tags().any(|t| criteria.tags.contains(t))
}
