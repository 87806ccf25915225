#![allow(dead_code)]

use serde_json::{json, Value};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tweetnet::Record;

// Weekday-consistent `created_at` values used across the tests.
pub const DEC_31_2023: &str = "Sun Dec 31 23:30:00 +0000 2023";
pub const JAN_01_2024: &str = "Mon Jan 01 10:00:00 +0000 2024";
pub const JAN_05_2024: &str = "Fri Jan 05 12:00:00 +0000 2024";
pub const JAN_10_2024: &str = "Wed Jan 10 08:15:00 +0000 2024";
pub const JAN_15_2024: &str = "Mon Jan 15 18:45:00 +0000 2024";
pub const JAN_20_2024: &str = "Sat Jan 20 09:00:00 +0000 2024";

/// An original tweet in the archive's JSON shape.
pub fn tweet(id: u64, author: &str, created_at: Option<&str>, mentions: &[&str], tags: &[&str]) -> Value {
    let mut v = json!({
        "id": id,
        "id_str": id.to_string(),
        "text": "hello",
        "user": { "screen_name": author, "id": 1 },
        "entities": {
            "hashtags": tags.iter().map(|t| json!({ "text": t, "indices": [0, 1] })).collect::<Vec<_>>(),
            "user_mentions": mentions.iter().map(|m| json!({ "screen_name": m, "id": 2 })).collect::<Vec<_>>(),
            "urls": []
        }
    });
    if let Some(ts) = created_at {
        v["created_at"] = json!(ts);
    }
    v
}

/// A retweet of `original` by `author`. Like real archives, the retweet
/// copies the original's mention entities.
pub fn retweet(id: u64, author: &str, created_at: Option<&str>, original: Value) -> Value {
    let mut v = json!({
        "id": id,
        "user": { "screen_name": author },
        "entities": original.get("entities").cloned().unwrap_or_else(|| json!({})),
        "retweeted_status": original,
    });
    if let Some(ts) = created_at {
        v["created_at"] = json!(ts);
    }
    v
}

pub fn record(v: &Value) -> Record {
    serde_json::from_value(v.clone()).unwrap()
}

pub fn records(vs: &[Value]) -> Vec<Record> {
    vs.iter().map(record).collect()
}

pub fn write_bz2_lines(path: &Path, lines: &[String]) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    let f = File::create(path).unwrap();
    let mut enc = bzip2::write::BzEncoder::new(f, bzip2::Compression::default());
    for l in lines {
        writeln!(&mut enc, "{}", l).unwrap();
    }
    enc.finish().unwrap();
}

pub fn write_zst_lines(path: &Path, lines: &[String]) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    let f = File::create(path).unwrap();
    let mut enc = zstd::stream::write::Encoder::new(f, 3).unwrap();
    for l in lines {
        writeln!(&mut enc, "{}", l).unwrap();
    }
    enc.finish().unwrap();
}

pub fn lines(vs: &[Value]) -> Vec<String> {
    vs.iter().map(|v| v.to_string()).collect()
}

/// Build a tiny nested corpus:
///
/// ```text
/// corpus/
///   top.bz2            t30 dave -> mentions [eve, eve]
///                      t31 eve  -> retweets t10 (alice), copies mention of bob
///   sub/
///     inner.zst        t10 alice original (mentions bob, #rust)
///                      t20 bob   retweets t10
///     nested/
///       deep.bz2       t11 carol original
///                      t21 alice retweets t11 (carol)
///                      <malformed line>
/// ```
///
/// Discovery order is `sub/nested/deep.bz2`, `sub/inner.zst`, `top.bz2`.
/// Returns the temp root; the corpus lives at `root/corpus`.
pub fn make_corpus_basic() -> PathBuf {
    let dir = tempfile::tempdir().unwrap();
    let base = dir.into_path();
    let corpus = base.join("corpus");

    let t10 = tweet(10, "alice", Some(JAN_01_2024), &["bob"], &["rust"]);
    let t11 = tweet(11, "carol", Some(JAN_05_2024), &[], &[]);

    let mut deep = lines(&[t11.clone(), retweet(21, "alice", Some(JAN_10_2024), t11)]);
    deep.push("{\"id\": 99, \"user\": ".to_string());
    write_bz2_lines(&corpus.join("sub").join("nested").join("deep.bz2"), &deep);

    write_zst_lines(
        &corpus.join("sub").join("inner.zst"),
        &lines(&[t10.clone(), retweet(20, "bob", Some(JAN_10_2024), t10.clone())]),
    );

    write_bz2_lines(
        &corpus.join("top.bz2"),
        &lines(&[
            tweet(30, "dave", Some(JAN_15_2024), &["eve", "eve"], &[]),
            retweet(31, "eve", Some(JAN_20_2024), t10),
        ]),
    );

    base
}

pub fn read_json(path: &Path) -> Value {
    let s = fs::read_to_string(path).unwrap();
    serde_json::from_str(&s).unwrap()
}
