#[path = "common/mod.rs"]
mod common;

use common::*;
use serde_json::json;
use tweetnet::{fold, to_string_indented, Record, RecordId, RetweetGraphBuilder, RetweetReportBuilder};

/// alice's P1 is retweeted by bob then carol, her P2 by bob:
/// receivedRetweets == 3 and the post map is {P1: [bob, carol], P2: [bob]}.
#[test]
fn counts_every_retweet_event() {
    let p1 = tweet(1, "alice", Some(JAN_01_2024), &[], &[]);
    let p2 = tweet(2, "alice", Some(JAN_01_2024), &[], &[]);
    let recs = records(&[
        retweet(101, "bob", Some(JAN_05_2024), p1.clone()),
        retweet(102, "carol", Some(JAN_05_2024), p1),
        retweet(103, "bob", Some(JAN_10_2024), p2),
    ]);

    let report = fold::<RetweetReportBuilder, _>(&recs);
    assert_eq!(report.retweets.len(), 1);
    let alice = report.get("alice").unwrap();
    assert_eq!(alice.received_retweets, 3);
    assert_eq!(alice.retweeters_of(&RecordId::Num(1)).unwrap(), ["bob", "carol"]);
    assert_eq!(alice.retweeters_of(&RecordId::Num(2)).unwrap(), ["bob"]);

    let summed: usize = alice.posts.iter().map(|(_, by)| by.len()).sum();
    assert_eq!(summed as u64, alice.received_retweets);
}

/// The same user retweeting the same post twice counts twice and is listed twice.
#[test]
fn repeated_retweets_are_not_deduplicated() {
    let p = tweet(7, "alice", None, &[], &[]);
    let recs = records(&[retweet(1, "bob", None, p.clone()), retweet(2, "bob", None, p)]);
    let report = fold::<RetweetReportBuilder, _>(&recs);
    let alice = report.get("alice").unwrap();
    assert_eq!(alice.received_retweets, 2);
    assert_eq!(alice.retweeters_of(&RecordId::Num(7)).unwrap(), ["bob", "bob"]);
}

/// Edges run original author -> retweeter; duplicates collapse; originals add nothing.
#[test]
fn graph_direction_and_collapse() {
    let p = tweet(1, "alice", None, &["zed"], &[]);
    let recs = records(&[
        p.clone(),
        retweet(2, "bob", None, p.clone()),
        retweet(3, "bob", None, p.clone()),
        retweet(4, "carol", None, p),
    ]);
    let g = fold::<RetweetGraphBuilder, _>(&recs);
    assert!(g.contains_edge("alice", "bob"));
    assert!(g.contains_edge("alice", "carol"));
    assert!(!g.contains_edge("bob", "alice"));
    assert_eq!(g.edge_count(), 2);
    assert_eq!(g.node_count(), 3);
    assert_eq!(g.successors("alice"), vec!["bob", "carol"]);
}

/// Retweets missing either handle are skipped; the rest still aggregate.
#[test]
fn shape_errors_skip_only_that_record() {
    let no_user = json!({ "id": 5, "retweeted_status": { "id": 1, "user": { "screen_name": "alice" } } });
    let no_orig_user = json!({ "id": 6, "user": { "screen_name": "bob" }, "retweeted_status": { "id": 1 } });
    let ok = retweet(7, "carol", None, tweet(1, "alice", None, &[], &[]));
    let recs = records(&[no_user, no_orig_user, ok]);

    let report = fold::<RetweetReportBuilder, _>(&recs);
    assert_eq!(report.get("alice").unwrap().received_retweets, 1);
    let g = fold::<RetweetGraphBuilder, _>(&recs);
    assert_eq!(g.edge_count(), 1);
    assert!(g.contains_edge("alice", "carol"));
}

/// Ties keep first-seen order: bob (seen first) before alice, both with 1,
/// behind carol with 2.
#[test]
fn ranking_is_stable_on_ties() {
    let recs = records(&[
        retweet(1, "x", None, tweet(10, "bob", None, &[], &[])),
        retweet(2, "x", None, tweet(11, "alice", None, &[], &[])),
        retweet(3, "x", None, tweet(12, "carol", None, &[], &[])),
        retweet(4, "y", None, tweet(12, "carol", None, &[], &[])),
        retweet(5, "x", None, tweet(13, "dan", None, &[], &[])),
    ]);
    let report = fold::<RetweetReportBuilder, _>(&recs);
    let order: Vec<_> = report.retweets.iter().map(|e| e.username.as_str()).collect();
    assert_eq!(order, ["carol", "bob", "alice", "dan"]);
}

/// Serialized shape: `{"retweets": [{username, receivedRetweets, tweets: {"tweetId: N": {retweetedBy}}}]}`
/// with post keys in first-seen order and 4-space indentation.
#[test]
fn report_json_shape() {
    let p9 = tweet(9, "alice", None, &[], &[]);
    let p3 = tweet(3, "alice", None, &[], &[]);
    let recs = records(&[retweet(1, "bob", None, p9), retweet(2, "carol", None, p3)]);
    let report = fold::<RetweetReportBuilder, _>(&recs);

    let text = to_string_indented(&report).unwrap();
    let expected = r#"{
    "retweets": [
        {
            "username": "alice",
            "receivedRetweets": 2,
            "tweets": {
                "tweetId: 9": {
                    "retweetedBy": [
                        "bob"
                    ]
                },
                "tweetId: 3": {
                    "retweetedBy": [
                        "carol"
                    ]
                }
            }
        }
    ]
}"#;
    assert_eq!(text, expected);
}

#[test]
fn empty_input_gives_empty_report() {
    let recs = records(&[tweet(1, "alice", None, &["bob"], &[])]);
    let report = fold::<RetweetReportBuilder, _>(&recs);
    assert!(report.retweets.is_empty());
    assert_eq!(to_string_indented(&report).unwrap(), "{\n    \"retweets\": []\n}");
}

/// A retweet whose hashtag lists are `null` still counts.
#[test]
fn null_hashtags_retweet_counts() {
    let line = r#"{"id":5,"user":{"screen_name":"bob"},"entities":{"hashtags":null,"user_mentions":[]},"retweeted_status":{"id":1,"user":{"screen_name":"alice"},"entities":{"hashtags":null}}}"#;
    let recs = vec![Record::from_json(line).unwrap()];

    let report = fold::<RetweetReportBuilder, _>(&recs);
    let alice = report.get("alice").unwrap();
    assert_eq!(alice.received_retweets, 1);
    assert_eq!(alice.retweeters_of(&RecordId::Num(1)).unwrap(), ["bob"]);
    let g = fold::<RetweetGraphBuilder, _>(&recs);
    assert!(g.contains_edge("alice", "bob"));
}

/// An empty `retweeted_status` object is not a retweet.
#[test]
fn empty_retweeted_status_is_not_a_retweet() {
    let rec = record(&json!({ "id": 8, "user": { "screen_name": "bob" }, "retweeted_status": {} }));
    assert!(!rec.is_repost());
    assert!(rec.repost_of().is_none());

    let recs = vec![rec];
    assert!(fold::<RetweetReportBuilder, _>(&recs).retweets.is_empty());
    assert_eq!(fold::<RetweetGraphBuilder, _>(&recs).edge_count(), 0);
}
