use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// A single generated short-video pitch.
///
/// Field names follow the JSON contract shared with the browser and with the
/// prompt sent to providers, so `virality_score` travels as `viralityScore`.
///
/// Decoding is best-effort: model output is not validated, so missing fields
/// decode to empty values and loosely typed ones are coerced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoIdea {
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub hook: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub script: String,
    #[serde(default, deserialize_with = "lenient_hashtags")]
    pub hashtags: Vec<String>,
    /// Informally 70-95; not enforced. Fractional and quoted scores are rounded.
    #[serde(default, deserialize_with = "lenient_score")]
    pub virality_score: i64,
    #[serde(default, deserialize_with = "lenient_text")]
    pub reasoning: String,
}

fn text_of(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(text_of)
}

/// Accepts a list, or a single string of space- or comma-separated tags.
fn lenient_hashtags<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items.into_iter().map(text_of).collect(),
        Value::String(s) => s
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|tag| !tag.is_empty())
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    })
}

fn lenient_score<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let score = match Value::deserialize(deserializer)? {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f.round() as i64)),
        Value::String(s) => s
            .trim()
            .trim_end_matches('%')
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|f| f.is_finite())
            .map(|f| f.round() as i64),
        _ => None,
    };
    Ok(score.unwrap_or_default())
}

/// A validated generation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdeaRequest {
    pub niche: String,
    pub trend: Option<String>,
}

impl IdeaRequest {
    /// Returns `None` when the niche is missing or blank. An empty trend is
    /// treated as no trend.
    pub fn new(niche: Option<String>, trend: Option<String>) -> Option<Self> {
        let niche = niche.filter(|n| !n.trim().is_empty())?;
        let trend = trend.filter(|t| !t.is_empty());
        Some(Self { niche, trend })
    }

    pub fn trend(&self) -> Option<&str> {
        self.trend.as_deref()
    }
}

/// Which strategy produced a list of ideas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdeaSource {
    Provider(&'static str),
    Fallback,
}

impl IdeaSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            IdeaSource::Provider(name) => *name,
            IdeaSource::Fallback => "fallback",
        }
    }
}

impl fmt::Display for IdeaSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
