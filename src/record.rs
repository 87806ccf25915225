//! Tweet-shaped post records as they appear in the archived JSONL corpus.
//! Every field is optional; extra fields are ignored by serde.

use crate::date::parse_created_at;
use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;
use time::PrimitiveDateTime;

/// Post identifier. Archives carry numeric ids; string ids are accepted too
/// and written back in the same form.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Num(u64),
    Str(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Num(n) => write!(f, "{n}"),
            RecordId::Str(s) => f.write_str(s),
        }
    }
}

impl From<u64> for RecordId {
    fn from(n: u64) -> Self { RecordId::Num(n) }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self { RecordId::Str(s.to_string()) }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct User {
    pub screen_name: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct UserMention {
    pub screen_name: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Hashtag {
    pub text: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Entities {
    /// `None` when the record carries no mention list at all.
    pub user_mentions: Option<Vec<UserMention>>,
    /// Empty when the list is absent or `null`.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub hashtags: Vec<Hashtag>,
}

fn null_as_empty<'de, D, T>(d: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(d)?.unwrap_or_default())
}

/// A falsy `retweeted_status` (`null`, `false`, `0`, `""`, `{}`, `[]`) means
/// the post is not a retweet.
fn non_empty_record<'de, D>(d: D) -> Result<Option<Box<Record>>, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Value::deserialize(d)?;
    let falsy = match &v {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    };
    if falsy {
        return Ok(None);
    }
    serde_json::from_value(v).map(|r| Some(Box::new(r))).map_err(de::Error::custom)
}

/// One ingested post. A retweet owns a copy of the original post in
/// `retweeted_status`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Record {
    pub id: Option<RecordId>,
    pub created_at: Option<String>,
    pub user: Option<User>,
    #[serde(default, deserialize_with = "non_empty_record")]
    pub retweeted_status: Option<Box<Record>>,
    pub entities: Option<Entities>,
}

impl Record {
    /// Parse one JSON line.
    #[inline]
    pub fn from_json(line: &str) -> serde_json::Result<Self> {
        serde_json::from_str(line)
    }

    pub fn author(&self) -> Option<&str> {
        self.user.as_ref().and_then(|u| u.screen_name.as_deref())
    }

    pub fn repost_of(&self) -> Option<&Record> {
        self.retweeted_status.as_deref()
    }

    pub fn is_repost(&self) -> bool {
        self.retweeted_status.is_some()
    }

    /// Mentioned handles in order, duplicates kept. `None` means the record
    /// has no mention entity list; entries without a handle are `None`.
    pub fn mention_handles(&self) -> Option<impl Iterator<Item = Option<&str>>> {
        let mentions = self.entities.as_ref()?.user_mentions.as_ref()?;
        Some(mentions.iter().map(|m| m.screen_name.as_deref()))
    }

    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.entities
            .iter()
            .flat_map(|e| e.hashtags.iter())
            .filter_map(|h| h.text.as_deref())
    }

    /// `None` when `created_at` is absent or does not parse.
    pub fn timestamp(&self) -> Option<PrimitiveDateTime> {
        self.created_at.as_deref().and_then(parse_created_at)
    }

    /// Short identifier for log lines.
    pub fn describe(&self) -> String {
        match &self.id {
            Some(id) => format!("id={id}"),
            None => "id=<missing>".to_string(),
        }
    }
}
