//! Mentions: the mentioner -> mentioned graph and the received-mentions report.
//!
//! The graph takes every record carrying a mention list, retweets included.
//! The report leaves retweets out, so mentions copied along with retweeted
//! text do not count as mentions received.

use crate::aggregate::Aggregator;
use crate::graph::InteractionGraph;
use crate::ranking::{rank_desc, Ranked};
use crate::record::{Record, RecordId};
use ahash::AHashMap;
use serde::Serialize;

#[derive(Debug, Default)]
pub struct MentionGraphBuilder {
    graph: InteractionGraph,
}

impl Aggregator for MentionGraphBuilder {
    type Output = InteractionGraph;

    fn ingest(&mut self, record: &Record) {
        let Some(mentions) = record.mention_handles() else {
            return;
        };
        let Some(mentioner) = record.author() else {
            tracing::warn!(record = %record.describe(), "skipping mentions of a record without author");
            return;
        };
        for handle in mentions {
            match handle {
                Some(h) => {
                    self.graph.add_edge(mentioner, h);
                }
                None => tracing::warn!(record = %record.describe(), "skipping mention without screen_name"),
            }
        }
    }

    fn finish(self) -> InteractionGraph {
        self.graph
    }
}

/// One mention occurrence. Never merged with other occurrences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MentionEvent {
    #[serde(rename = "mentionBy")]
    pub mention_by: String,
    pub tweets: Vec<Option<RecordId>>,
}

/// Mentions received by one author.
#[derive(Debug, Clone, Serialize)]
pub struct MentionEntry {
    pub username: String,
    #[serde(rename = "receivedMentions")]
    pub received_mentions: u64,
    pub mentions: Vec<MentionEvent>,
    #[serde(skip)]
    first_seen: u64,
}

impl Ranked for MentionEntry {
    fn count(&self) -> u64 { self.received_mentions }
    fn first_seen(&self) -> u64 { self.first_seen }
}

/// Ranked mention report, serialized as a bare array.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct MentionReport {
    pub entries: Vec<MentionEntry>,
}

impl MentionReport {
    pub fn get(&self, username: &str) -> Option<&MentionEntry> {
        self.entries.iter().find(|e| e.username == username)
    }
}

#[derive(Debug, Default)]
pub struct MentionReportBuilder {
    entries: AHashMap<String, MentionEntry>,
    seq: u64,
}

impl Aggregator for MentionReportBuilder {
    type Output = MentionReport;

    fn ingest(&mut self, record: &Record) {
        let Some(mentions) = record.mention_handles() else {
            return;
        };
        if record.is_repost() {
            return;
        }
        let Some(mentioner) = record.author() else {
            tracing::warn!(record = %record.describe(), "skipping mentions of a record without author");
            return;
        };
        for handle in mentions {
            let Some(h) = handle else {
                tracing::warn!(record = %record.describe(), "skipping mention without screen_name");
                continue;
            };
            let seq = &mut self.seq;
            let entry = self.entries.entry(h.to_string()).or_insert_with(|| {
                *seq += 1;
                MentionEntry {
                    username: h.to_string(),
                    received_mentions: 0,
                    mentions: Vec::new(),
                    first_seen: *seq,
                }
            });
            entry.mentions.push(MentionEvent {
                mention_by: mentioner.to_string(),
                tweets: vec![record.id.clone()],
            });
            entry.received_mentions += 1;
        }
    }

    fn finish(self) -> MentionReport {
        MentionReport { entries: rank_desc(self.entries.into_values().collect()) }
    }
}
