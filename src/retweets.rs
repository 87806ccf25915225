//! Retweet propagation: the original-author -> retweeter graph and the
//! received-retweets report.

use crate::aggregate::Aggregator;
use crate::graph::InteractionGraph;
use crate::ranking::{rank_desc, Ranked};
use crate::record::{Record, RecordId};
use ahash::AHashMap;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// Report key for an original post.
pub fn tweet_key(id: &RecordId) -> String {
    format!("tweetId: {id}")
}

/// `(retweeter, original post, original author)` for a retweet, or `None`
/// (logged) when a nested handle is missing. Plain posts return `None` silently.
fn retweet_pair(record: &Record) -> Option<(&str, &Record, &str)> {
    let original = record.repost_of()?;
    let (Some(reposter), Some(orig_author)) = (record.author(), original.author()) else {
        tracing::warn!(record = %record.describe(), "skipping retweet without author handles");
        return None;
    };
    Some((reposter, original, orig_author))
}

#[derive(Debug, Default)]
pub struct RetweetGraphBuilder {
    graph: InteractionGraph,
}

impl Aggregator for RetweetGraphBuilder {
    type Output = InteractionGraph;

    fn ingest(&mut self, record: &Record) {
        if let Some((reposter, _, original)) = retweet_pair(record) {
            self.graph.add_edge(original, reposter);
        }
    }

    fn finish(self) -> InteractionGraph {
        self.graph
    }
}

#[derive(Debug, Serialize)]
struct RetweetedBy<'a> {
    #[serde(rename = "retweetedBy")]
    retweeted_by: &'a [String],
}

fn serialize_posts<S: Serializer>(posts: &[(String, Vec<String>)], s: S) -> Result<S::Ok, S::Error> {
    let mut map = s.serialize_map(Some(posts.len()))?;
    for (key, by) in posts {
        map.serialize_entry(key, &RetweetedBy { retweeted_by: by })?;
    }
    map.end()
}

/// Retweets received by one author.
#[derive(Debug, Clone, Serialize)]
pub struct RetweetEntry {
    pub username: String,
    #[serde(rename = "receivedRetweets")]
    pub received_retweets: u64,
    /// `(tweet key, retweeters)` in first-seen order of the post.
    #[serde(rename = "tweets", serialize_with = "serialize_posts")]
    pub posts: Vec<(String, Vec<String>)>,
    #[serde(skip)]
    post_index: AHashMap<String, usize>,
    #[serde(skip)]
    first_seen: u64,
}

impl RetweetEntry {
    fn new(username: &str, first_seen: u64) -> Self {
        Self {
            username: username.to_string(),
            received_retweets: 0,
            posts: Vec::new(),
            post_index: AHashMap::new(),
            first_seen,
        }
    }

    fn record(&mut self, post: &RecordId, reposter: &str) {
        let key = tweet_key(post);
        let slot = match self.post_index.get(&key) {
            Some(&i) => i,
            None => {
                self.posts.push((key.clone(), Vec::new()));
                self.post_index.insert(key, self.posts.len() - 1);
                self.posts.len() - 1
            }
        };
        self.posts[slot].1.push(reposter.to_string());
        self.received_retweets += 1;
    }

    /// Retweeters of `post`, in the order they were seen.
    pub fn retweeters_of(&self, post: &RecordId) -> Option<&[String]> {
        self.post_index
            .get(&tweet_key(post))
            .map(|&i| self.posts[i].1.as_slice())
    }
}

impl Ranked for RetweetEntry {
    fn count(&self) -> u64 { self.received_retweets }
    fn first_seen(&self) -> u64 { self.first_seen }
}

/// Ranked retweet report, serialized as `{"retweets": [...]}`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RetweetReport {
    pub retweets: Vec<RetweetEntry>,
}

impl RetweetReport {
    pub fn get(&self, username: &str) -> Option<&RetweetEntry> {
        self.retweets.iter().find(|e| e.username == username)
    }
}

#[derive(Debug, Default)]
pub struct RetweetReportBuilder {
    entries: AHashMap<String, RetweetEntry>,
    seq: u64,
}

impl Aggregator for RetweetReportBuilder {
    type Output = RetweetReport;

    fn ingest(&mut self, record: &Record) {
        let Some((reposter, original, orig_author)) = retweet_pair(record) else {
            return;
        };
        let Some(post) = original.id.as_ref() else {
            tracing::warn!(record = %record.describe(), "skipping retweet of a post without id");
            return;
        };
        let seq = &mut self.seq;
        let entry = self.entries.entry(orig_author.to_string()).or_insert_with(|| {
            *seq += 1;
            RetweetEntry::new(orig_author, *seq)
        });
        entry.record(post, reposter);
    }

    fn finish(self) -> RetweetReport {
        RetweetReport { retweets: rank_desc(self.entries.into_values().collect()) }
    }
}
