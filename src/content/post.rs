//! Post record model

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Metadata for one blog post, as written to the site's post index
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PostRecord {
    /// Post title
    #[serde(default, deserialize_with = "nullable_string")]
    pub title: String,

    /// Link to the post (relative or absolute)
    #[serde(default, deserialize_with = "nullable_string")]
    pub url: String,

    /// Publication date, as written by the author
    #[serde(default, with = "lenient_date")]
    pub date: Option<NaiveDateTime>,

    /// Post categories
    #[serde(default, deserialize_with = "one_or_many")]
    pub categories: Vec<String>,

    /// Post tags
    #[serde(default, deserialize_with = "one_or_many")]
    pub tags: Vec<String>,

    /// Short description shown under the title
    #[serde(default, alias = "summary", deserialize_with = "nullable_string")]
    pub excerpt: String,

    /// Plain-text body, kept when the index carries it
    #[serde(
        default,
        skip_serializing_if = "String::is_empty",
        deserialize_with = "nullable_string"
    )]
    pub content: String,
}

impl PostRecord {
    /// Create a record with a title and link
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            ..Default::default()
        }
    }

    /// Builder-style date setter
    pub fn with_date(mut self, date: NaiveDateTime) -> Self {
        self.date = Some(date);
        self
    }

    /// Builder-style categories setter
    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    /// Builder-style tags setter
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Builder-style excerpt setter
    pub fn with_excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = excerpt.into();
        self
    }

    /// Categories followed by tags
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.categories
            .iter()
            .chain(self.tags.iter())
            .map(String::as_str)
    }
}

fn nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accept `"rust"`, `["rust", "wasm"]` or `null`
fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    let values = match Option::<OneOrMany>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(OneOrMany::One(value)) => vec![value],
        Some(OneOrMany::Many(values)) => values,
    };

    Ok(values
        .into_iter()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .collect())
}

/// Parse the date forms that show up in post indexes.
///
/// Offsets are dropped after parsing: the wall-clock time the author wrote
/// is what gets displayed.
pub fn parse_date(input: &str) -> Option<NaiveDateTime> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.naive_local());
    }

    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(input, format) {
            return Some(dt);
        }
    }

    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

mod lenient_date {
    use super::*;

    pub fn serialize<S>(date: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(dt) => serializer.serialize_str(&dt.format("%Y-%m-%dT%H:%M:%S").to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        let parsed = raw.as_deref().and_then(parse_date);
        if parsed.is_none() {
            if let Some(raw) = raw.filter(|r| !r.trim().is_empty()) {
                tracing::debug!("Ignoring unparseable post date {:?}", raw);
            }
        }
        Ok(parsed)
    }
}
