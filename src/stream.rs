//! Record Stream Builder: gate candidates through the scope predicate and
//! collect the accepted sequence, preserving discovery order.

use crate::archive::{for_each_record, ReadStats};
use crate::config::FilterCriteria;
use crate::filters::accept;
use crate::paths::ArchiveJob;
use crate::record::Record;
use indicatif::ProgressBar;

/// The accepted sequence plus ingestion counters. Read-only once built.
#[derive(Debug, Default)]
pub struct AcceptedStream {
    pub records: Vec<Record>,
    pub scanned: u64,   // decoded candidates offered to the predicate
    pub malformed: u64, // lines dropped by the archive reader
}

impl AcceptedStream {
    pub fn len(&self) -> usize {
        self.records.len()
    }
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }
}

/// Filter an in-memory candidate sequence. Order is kept, nothing is merged.
pub fn filter_records<I>(candidates: I, criteria: &FilterCriteria) -> AcceptedStream
where
    I: IntoIterator<Item = Record>,
{
    let mut out = AcceptedStream::default();
    for rec in candidates {
        out.scanned += 1;
        if accept(&rec, criteria) {
            out.records.push(rec);
        }
    }
    out
}

/// Read every planned archive in order and keep the records in scope.
pub fn collect_accepted(
    jobs: &[ArchiveJob],
    criteria: &FilterCriteria,
    read_buf_bytes: usize,
    pb: Option<&ProgressBar>,
) -> AcceptedStream {
    let mut out = AcceptedStream::default();
    let mut stats = ReadStats::default();

    for job in jobs {
        let before = out.records.len();
        let file_stats = for_each_record(
            job,
            read_buf_bytes,
            |delta| {
                if let Some(pb) = pb {
                    pb.inc(delta);
                }
            },
            |rec| {
                out.scanned += 1;
                if accept(&rec, criteria) {
                    out.records.push(rec);
                }
            },
        );
        tracing::debug!(
            path = %job.path.display(),
            lines = file_stats.lines,
            malformed = file_stats.malformed,
            accepted = out.records.len() - before,
            "archive done"
        );
        stats.merge(file_stats);
    }

    out.malformed = stats.malformed;
    out
}
