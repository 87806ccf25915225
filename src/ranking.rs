//! Shared ordering rule for both reports.

/// An aggregate entry that can be ranked by a count.
pub trait Ranked {
    fn count(&self) -> u64;
    /// Sequence number assigned when the entry's key was first seen.
    fn first_seen(&self) -> u64;
}

/// Sort by count, descending; equal counts fall back to first-seen order.
pub fn rank_desc<T: Ranked>(mut entries: Vec<T>) -> Vec<T> {
    entries.sort_by(|a, b| {
        b.count()
            .cmp(&a.count())
            .then_with(|| a.first_seen().cmp(&b.first_seen()))
    });
    entries
}
