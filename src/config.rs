use ahash::AHashSet;
use std::path::{Path, PathBuf};
use time::PrimitiveDateTime;

/// Which records are in scope for a run. Built once, never mutated afterwards.
#[derive(Clone, Debug, Default)]
pub struct FilterCriteria {
    pub start: Option<PrimitiveDateTime>,
    pub end: Option<PrimitiveDateTime>,
    pub tags: AHashSet<String>, // exact, case-sensitive match on hashtag text
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn with_start(mut self, start: PrimitiveDateTime) -> Self {
        self.start = Some(start);
        self
    }
    pub fn with_end(mut self, end: PrimitiveDateTime) -> Self {
        self.end = Some(end);
        self
    }
    pub fn with_date_range(mut self, start: Option<PrimitiveDateTime>, end: Option<PrimitiveDateTime>) -> Self {
        self.start = start;
        self.end = end;
        self
    }
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn has_date_bounds(&self) -> bool {
        self.start.is_some() || self.end.is_some()
    }

    /// No bounds and no tags: every record is accepted.
    pub fn is_unrestricted(&self) -> bool {
        !self.has_date_bounds() && self.tags.is_empty()
    }
}

/// Output switches. Each one is independent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Outputs {
    pub retweet_graph: bool,   // rt.gexf
    pub retweet_report: bool,  // rt.json
    pub mention_graph: bool,   // mention.gexf
    pub mention_report: bool,  // mention.json
    pub coretweet_graph: bool, // accepted, not implemented
    pub coretweet_report: bool, // accepted, not implemented
}

impl Outputs {
    /// The four implemented outputs.
    pub fn all() -> Self {
        Self {
            retweet_graph: true,
            retweet_report: true,
            mention_graph: true,
            mention_report: true,
            ..Default::default()
        }
    }
    pub fn any(&self) -> bool {
        self.retweet_graph || self.retweet_report || self.mention_graph || self.mention_report
    }
}

/// User-facing options with defaults and builder chaining.
#[derive(Clone, Debug)]
pub struct RunOptions {
    pub input: PathBuf,    // archive file or directory tree
    pub out_dir: PathBuf,  // where rt.* / mention.* land
    pub criteria: FilterCriteria,
    pub outputs: Outputs,
    pub progress: bool,
    pub progress_label: Option<String>,
    pub read_buffer_bytes: usize, // BufReader capacity over the decoder
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            input: PathBuf::from("/data"),
            out_dir: PathBuf::from("."),
            criteria: FilterCriteria::default(),
            outputs: Outputs::default(),
            progress: true,
            progress_label: None,
            read_buffer_bytes: 256 * 1024,
        }
    }
}

impl RunOptions {
    pub fn with_input(mut self, input: impl AsRef<Path>) -> Self {
        self.input = input.as_ref().to_path_buf();
        self
    }
    pub fn with_out_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.out_dir = dir.as_ref().to_path_buf();
        self
    }
    pub fn with_criteria(mut self, criteria: FilterCriteria) -> Self {
        self.criteria = criteria;
        self
    }
    pub fn with_outputs(mut self, outputs: Outputs) -> Self {
        self.outputs = outputs;
        self
    }
    pub fn with_progress(mut self, yes: bool) -> Self {
        self.progress = yes;
        self
    }
    pub fn with_progress_label(mut self, label: impl Into<String>) -> Self {
        self.progress_label = Some(label.into());
        self
    }
    pub fn with_io_read_buffer(mut self, bytes: usize) -> Self {
        self.read_buffer_bytes = bytes.max(8 * 1024);
        self
    }
}
