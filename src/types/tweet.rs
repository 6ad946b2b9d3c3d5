//! Tweet records and the lenient JSON boundary they are parsed from.

use serde::Serialize;
use serde_json::Value;

use crate::types::error::{GraphError, GraphResult};

/// One tweet, reduced to what the mention graph needs.
///
/// `mentions` and `hashtags` behave as ordered sets: duplicates are
/// dropped and first occurrence wins. Hashtags keep the case they were
/// given in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TweetRecord {
    /// Screen name of the author.
    #[serde(rename = "user")]
    pub author: String,
    /// Tweet body. Only used to tell tweets apart during retrieval.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Screen names mentioned in the tweet, author excluded.
    pub mentions: Vec<String>,
    /// Hashtags attached to the tweet, without the leading `#`.
    pub hashtags: Vec<String>,
}

impl TweetRecord {
    /// Create a record, deduplicating mentions and hashtags and stripping
    /// the author from its own mentions.
    pub fn new<M, H>(author: impl Into<String>, mentions: M, hashtags: H) -> Self
    where
        M: IntoIterator,
        M::Item: Into<String>,
        H: IntoIterator,
        H::Item: Into<String>,
    {
        let author = author.into();
        let mut mentions = dedup(mentions.into_iter().map(Into::into));
        mentions.retain(|m| *m != author);
        Self {
            author,
            text: None,
            mentions,
            hashtags: dedup(hashtags.into_iter().map(Into::into)),
        }
    }

    /// Attach the tweet body.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Convert one element of the input array. `index` is only used for
    /// error reporting.
    ///
    /// `user` is required. `mentions` and `hashtags` may be absent, null,
    /// or not a list at all; each of those reads as empty. Non-string list
    /// entries are ignored.
    pub fn from_value(index: usize, value: &Value) -> GraphResult<Self> {
        let obj = value.as_object().ok_or_else(|| GraphError::MalformedRecord {
            index,
            reason: format!("expected an object, got {}", json_kind(value)),
        })?;

        let author = match obj.get("user") {
            None | Some(Value::Null) => return Err(GraphError::MissingAuthor { index }),
            Some(Value::String(s)) => s.clone(),
            Some(other) => {
                return Err(GraphError::MalformedRecord {
                    index,
                    reason: format!("`user` must be a string, got {}", json_kind(other)),
                })
            }
        };

        let mut record = Self::new(
            author,
            string_list(obj.get("mentions")),
            string_list(obj.get("hashtags")),
        );
        record.text = obj.get("text").and_then(Value::as_str).map(str::to_string);
        Ok(record)
    }
}

/// Parse a JSON array of tweet objects. The first malformed record aborts
/// the whole parse.
pub fn parse_tweets(json: &str) -> GraphResult<Vec<TweetRecord>> {
    let values: Vec<Value> = serde_json::from_str(json)?;
    values
        .iter()
        .enumerate()
        .map(|(i, v)| TweetRecord::from_value(i, v))
        .collect()
}

fn string_list(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    }
}

fn dedup(items: impl Iterator<Item = String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for item in items {
        if !out.contains(&item) {
            out.push(item);
        }
    }
    out
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
