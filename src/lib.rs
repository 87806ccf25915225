mod config;
mod date;
mod record;
mod filters;

mod paths;
mod archive;
mod progress;
mod stream;

mod aggregate;
mod graph;
mod ranking;
mod retweets;
mod mentions;

mod gexf;
mod report;
mod util;
mod pipeline;

pub use crate::config::{FilterCriteria, Outputs, RunOptions};
pub use crate::date::{parse_cli_date, parse_created_at};
pub use crate::record::{Entities, Hashtag, Record, RecordId, User, UserMention};
pub use crate::filters::{accept, date_bounds_ok};
pub use crate::pipeline::{
    RunSummary, TweetNet, MENTION_GRAPH_FILE, MENTION_REPORT_FILE, RETWEET_GRAPH_FILE, RETWEET_REPORT_FILE,
};

// Discovery + archive reading.
pub use crate::paths::{discover_archives, ArchiveJob, ArchiveKind};
pub use crate::archive::{for_each_record, ReadStats};
pub use crate::stream::{collect_accepted, filter_records, AcceptedStream};

// Aggregation: builders, outputs and the shared ranking rule.
pub use crate::aggregate::{fold, fold_with, Aggregator};
pub use crate::graph::InteractionGraph;
pub use crate::ranking::{rank_desc, Ranked};
pub use crate::retweets::{tweet_key, RetweetEntry, RetweetGraphBuilder, RetweetReport, RetweetReportBuilder};
pub use crate::mentions::{MentionEntry, MentionEvent, MentionGraphBuilder, MentionReport, MentionReportBuilder};

// Writers.
pub use crate::gexf::{export_gexf, write_gexf};
pub use crate::report::{to_string_indented, write_report};
pub use crate::util::{init_tracing_once, load_tag_file};
