//! Fold support over the accepted sequence.
//! Implement `Aggregator` for a builder and call `fold` (or `fold_with`).

use crate::record::Record;

pub trait Aggregator {
    type Output;
    /// Account for one record. Records the builder cannot use are skipped
    /// (and logged) without affecting the rest of the fold.
    fn ingest(&mut self, record: &Record);
    fn finish(self) -> Self::Output;
}

/// Run a fresh `A` over `records` in order.
pub fn fold<'a, A, I>(records: I) -> A::Output
where
    A: Aggregator + Default,
    I: IntoIterator<Item = &'a Record>,
{
    fold_with(A::default(), records)
}

pub fn fold_with<'a, A, I>(mut agg: A, records: I) -> A::Output
where
    A: Aggregator,
    I: IntoIterator<Item = &'a Record>,
{
    for rec in records {
        agg.ingest(rec);
    }
    agg.finish()
}
