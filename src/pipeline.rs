use crate::aggregate::fold;
use crate::archive::total_compressed_size;
use crate::config::{FilterCriteria, Outputs, RunOptions};
use crate::date::parse_cli_date;
use crate::gexf::export_gexf;
use crate::mentions::{MentionGraphBuilder, MentionReportBuilder};
use crate::paths::{discover_archives, ArchiveJob};
use crate::progress::make_progress_bar_labeled;
use crate::report::write_report;
use crate::retweets::{RetweetGraphBuilder, RetweetReportBuilder};
use crate::stream::{collect_accepted, AcceptedStream};
use crate::util::{init_tracing_once, load_tag_file};
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use time::PrimitiveDateTime;

pub const RETWEET_GRAPH_FILE: &str = "rt.gexf";
pub const RETWEET_REPORT_FILE: &str = "rt.json";
pub const MENTION_GRAPH_FILE: &str = "mention.gexf";
pub const MENTION_REPORT_FILE: &str = "mention.json";

/// What a run did.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub files: usize,
    pub scanned: u64,
    pub accepted: usize,
    pub malformed: u64,
    pub written: Vec<PathBuf>,
    pub elapsed: Duration,
}

#[derive(Clone, Debug, Default)]
pub struct TweetNet {
    pub(crate) opts: RunOptions,
}

impl TweetNet {
    pub fn new() -> Self {
        Self { opts: RunOptions::default() }
    }

    pub fn from_options(opts: RunOptions) -> Self {
        Self { opts }
    }

    // -------- Builder methods --------
    pub fn input(mut self, path: impl AsRef<Path>) -> Self { self.opts = self.opts.with_input(path); self }
    pub fn out_dir(mut self, dir: impl AsRef<Path>) -> Self { self.opts = self.opts.with_out_dir(dir); self }
    pub fn criteria(mut self, criteria: FilterCriteria) -> Self { self.opts = self.opts.with_criteria(criteria); self }
    pub fn date_range(mut self, start: Option<PrimitiveDateTime>, end: Option<PrimitiveDateTime>) -> Self {
        self.opts.criteria = self.opts.criteria.with_date_range(start, end); self
    }
    pub fn tags<I, S>(mut self, tags: I) -> Self where I: IntoIterator<Item = S>, S: Into<String> {
        self.opts.criteria = self.opts.criteria.with_tags(tags); self
    }
    pub fn outputs(mut self, outputs: Outputs) -> Self { self.opts = self.opts.with_outputs(outputs); self }
    pub fn progress(mut self, yes: bool) -> Self { self.opts = self.opts.with_progress(yes); self }
    pub fn progress_label(mut self, label: impl Into<String>) -> Self { self.opts = self.opts.with_progress_label(label); self }
    pub fn io_read_buffer(mut self, bytes: usize) -> Self { self.opts = self.opts.with_io_read_buffer(bytes); self }

    /// Parse `dd-mm-yy` bounds. Errors are configuration errors.
    pub fn date_range_str(self, start: Option<&str>, end: Option<&str>) -> Result<Self> {
        let start = start.map(|s| parse_cli_date(s).context("start date")).transpose()?;
        let end = end.map(|s| parse_cli_date(s).context("end date")).transpose()?;
        Ok(self.date_range(start, end))
    }

    /// Load the tag set from a newline-separated file.
    pub fn tags_file(self, path: impl AsRef<Path>) -> Result<Self> {
        let tags = load_tag_file(path.as_ref())?;
        tracing::info!(count = tags.len(), path = %path.as_ref().display(), "loaded tags");
        Ok(self.tags(tags))
    }

    pub fn options(&self) -> &RunOptions {
        &self.opts
    }

    /// Discover and read the archives, keeping the records in scope.
    pub fn collect(&self) -> Result<AcceptedStream> {
        let jobs = discover_archives(&self.opts.input)?;
        Ok(self.collect_from(&jobs))
    }

    fn collect_from(&self, jobs: &[ArchiveJob]) -> AcceptedStream {
        if jobs.is_empty() {
            tracing::warn!(input = %self.opts.input.display(), "No archives (.bz2/.zst) found under input.");
        } else {
            tracing::info!("Planned {} archives for processing.", jobs.len());
        }

        let pb = if self.opts.progress {
            Some(make_progress_bar_labeled(total_compressed_size(jobs), self.opts.progress_label.as_deref()))
        } else {
            None
        };
        let stream = collect_accepted(jobs, &self.opts.criteria, self.opts.read_buffer_bytes, pb.as_ref());
        if let Some(pb) = pb {
            pb.finish_with_message("read done");
        }
        stream
    }

    /// One full run: collect once, then build each enabled output from the same sequence.
    pub fn run(self) -> Result<RunSummary> {
        init_tracing_once();
        let t0 = Instant::now();
        let outputs = self.opts.outputs;

        if !outputs.any() && !outputs.coretweet_graph && !outputs.coretweet_report {
            tracing::warn!("No outputs selected; records will be counted only.");
        }
        let jobs = discover_archives(&self.opts.input)?;
        if outputs.any() {
            fs::create_dir_all(&self.opts.out_dir)
                .with_context(|| format!("create output dir {}", self.opts.out_dir.display()))?;
        }
        let stream = self.collect_from(&jobs);
        tracing::info!(scanned = stream.scanned, accepted = stream.len(), malformed = stream.malformed, "records collected");

        let out = |name: &str| self.opts.out_dir.join(name);
        let mut written = Vec::new();

        if outputs.retweet_graph {
            let graph = fold::<RetweetGraphBuilder, _>(stream.iter());
            let p = out(RETWEET_GRAPH_FILE);
            export_gexf(&graph, &p)?;
            written.push(p);
        }
        if outputs.retweet_report {
            let report = fold::<RetweetReportBuilder, _>(stream.iter());
            let p = out(RETWEET_REPORT_FILE);
            write_report(&report, &p)?;
            written.push(p);
        }
        if outputs.mention_graph {
            let graph = fold::<MentionGraphBuilder, _>(stream.iter());
            let p = out(MENTION_GRAPH_FILE);
            export_gexf(&graph, &p)?;
            written.push(p);
        }
        if outputs.mention_report {
            let report = fold::<MentionReportBuilder, _>(stream.iter());
            let p = out(MENTION_REPORT_FILE);
            write_report(&report, &p)?;
            written.push(p);
        }
        if outputs.coretweet_graph {
            tracing::warn!("co-retweet graph is not implemented; no file written");
        }
        if outputs.coretweet_report {
            tracing::warn!("co-retweet report is not implemented; no file written");
        }

        Ok(RunSummary {
            files: jobs.len(),
            scanned: stream.scanned,
            accepted: stream.len(),
            malformed: stream.malformed,
            written,
            elapsed: t0.elapsed(),
        })
    }
}
