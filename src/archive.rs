//! Archive reader: decompress `.bz2` / `.zst` JSONL files and decode each
//! line into a `Record`. Undecodable lines are logged and dropped here, so
//! callers only ever see well-formed candidates.

use crate::paths::{ArchiveJob, ArchiveKind};
use crate::record::Record;
use anyhow::{Context, Result};
use bzip2::read::MultiBzDecoder;
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;
use std::cell::Cell;
use std::rc::Rc;
use zstd::stream::read::Decoder as ZstdDecoder;

const PREVIEW_CHARS: usize = 120;

/// Per-file line accounting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReadStats {
    pub lines: u64,     // non-blank lines seen
    pub malformed: u64, // lines dropped as undecodable
}

impl ReadStats {
    pub fn merge(&mut self, other: ReadStats) {
        self.lines += other.lines;
        self.malformed += other.malformed;
    }
}

#[inline]
fn warn_stream_skip(path: &Path, e: &anyhow::Error) {
    let abs = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    tracing::warn!(
        path = %abs.display(),
        error = %e,
        "archive decode failed; skipping the rest of this file"
    );
}

#[inline]
fn preview(line: &str) -> String {
    let mut p: String = line.chars().take(PREVIEW_CHARS).collect();
    if line.chars().nth(PREVIEW_CHARS).is_some() {
        p.push_str("...");
    }
    p
}

/// A `Read` wrapper that counts compressed bytes read.
struct CountingReader<R: Read> {
    inner: R,
    counter: Rc<Cell<u64>>,
}
impl<R: Read> Read for CountingReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        self.counter.set(self.counter.get() + n as u64);
        Ok(n)
    }
}

fn open_decoder(job: &ArchiveJob, counter: Rc<Cell<u64>>) -> Result<Box<dyn Read>> {
    let file = File::open(&job.path).with_context(|| format!("open {}", job.path.display()))?;
    let cnt = CountingReader { inner: file, counter };
    Ok(match job.kind {
        ArchiveKind::Bz2 => Box::new(MultiBzDecoder::new(cnt)),
        ArchiveKind::Zst => {
            let mut dec = ZstdDecoder::new(cnt)?;
            // large frames otherwise fail with "Frame requires too much memory"
            dec.window_log_max(31)?;
            Box::new(dec)
        }
    })
}

/// Stream every decodable record of `job` into `on_record`, in file order.
///
/// `on_progress` receives compressed-byte deltas. A stream-level failure
/// (corrupt archive, truncated file, unreadable path) logs one warning and
/// ends this file early; records already delivered stay delivered, and the
/// progress bar is advanced to the file's full size.
pub fn for_each_record(
    job: &ArchiveJob,
    read_buf_bytes: usize,
    mut on_progress: impl FnMut(u64),
    mut on_record: impl FnMut(Record),
) -> ReadStats {
    let mut stats = ReadStats::default();
    let counter = Rc::new(Cell::new(0u64));
    let mut last = 0u64;

    let res = (|| -> Result<()> {
        let dec = open_decoder(job, Rc::clone(&counter))?;
        let mut reader = BufReader::with_capacity(read_buf_bytes.max(8 * 1024), dec);
        let mut buf: Vec<u8> = Vec::with_capacity(16 * 1024);
        let mut line_no = 0u64;
        loop {
            buf.clear();
            let n = reader
                .read_until(b'\n', &mut buf)
                .with_context(|| format!("read {} after line {}", job.path.display(), line_no))?;
            if n == 0 {
                break;
            }
            line_no += 1;

            let cur = counter.get();
            if cur > last {
                on_progress(cur - last);
                last = cur;
            }

            let text = match std::str::from_utf8(&buf) {
                Ok(t) => t.trim_end_matches(&['\n', '\r'][..]),
                Err(e) => {
                    stats.lines += 1;
                    stats.malformed += 1;
                    tracing::warn!(path = %job.path.display(), line = line_no, error = %e, "dropping non-UTF-8 line");
                    continue;
                }
            };
            if text.trim().is_empty() {
                continue;
            }
            stats.lines += 1;
            match Record::from_json(text) {
                Ok(rec) => on_record(rec),
                Err(e) => {
                    stats.malformed += 1;
                    tracing::warn!(
                        path = %job.path.display(),
                        line = line_no,
                        error = %e,
                        raw = %preview(text),
                        "dropping undecodable record"
                    );
                }
            }
        }
        Ok(())
    })();

    match res {
        Ok(()) => {
            let cur = counter.get();
            if cur > last {
                on_progress(cur - last);
            }
        }
        Err(e) => {
            warn_stream_skip(&job.path, &e);
            if let Ok(meta) = fs::metadata(&job.path) {
                on_progress(meta.len().saturating_sub(last));
            }
        }
    }
    stats
}

/// Sum of on-disk (compressed) sizes, for byte-based progress.
pub fn total_compressed_size(jobs: &[ArchiveJob]) -> u64 {
    jobs.iter()
        .map(|j| fs::metadata(&j.path).map(|m| m.len()).unwrap_or(0))
        .sum()
}
