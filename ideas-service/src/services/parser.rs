//! Extraction of ideas from free-form provider text.

use crate::models::VideoIdea;
use regex::Regex;
use serde_json::Value;
use std::sync::OnceLock;

/// First `[` through the last `]`, across newlines.
fn array_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\[[\s\S]*\]").expect("array pattern is valid"))
}

/// Pulls the bracketed JSON array out of `content` and decodes it.
///
/// Returns `None` when there is no array, or when the match is not a JSON
/// array of objects. Fields inside each object are decoded best-effort.
pub fn extract_ideas(content: &str) -> Option<Vec<VideoIdea>> {
    let candidate = array_pattern().find(content)?;

    let items: Vec<Value> = match serde_json::from_str(candidate.as_str()) {
        Ok(items) => items,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to decode ideas array from provider reply");
            return None;
        }
    };

    if !items.iter().all(Value::is_object) {
        tracing::warn!("Provider reply array contains non-object entries");
        return None;
    }

    items
        .into_iter()
        .map(serde_json::from_value::<VideoIdea>)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| tracing::warn!(error = %e, "Failed to decode idea from provider reply"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ONE_IDEA: &str = r#"[{"title":"T","hook":"H","script":"S","hashtags":["a","b"],"viralityScore":81,"reasoning":"R"}]"#;

    fn ideas(content: &str) -> Vec<VideoIdea> {
        extract_ideas(content).unwrap_or_default()
    }

    #[test]
    fn decodes_bare_array() {
        let ideas = ideas(ONE_IDEA);
        assert_eq!(ideas.len(), 1);
        assert_eq!(ideas[0].title, "T");
        assert_eq!(ideas[0].virality_score, 81);
        assert_eq!(ideas[0].hashtags, vec!["a", "b"]);
    }

    #[test]
    fn ignores_prose_around_the_array() {
        let content = format!("Sure! Here are your ideas:\n\n```json\n{}\n```\nEnjoy.", ONE_IDEA);
        assert_eq!(ideas(&content).len(), 1);
    }

    #[test]
    fn spans_multiple_lines() {
        let content = r#"[
  {
    "title": "A",
    "hook": "B",
    "script": "[0-3s] C\n[3-10s] D",
    "hashtags": ["x"],
    "viralityScore": 90,
    "reasoning": "E"
  },
  {
    "title": "F",
    "hook": "G",
    "script": "H",
    "hashtags": [],
    "viralityScore": 75,
    "reasoning": "I"
  }
]"#;
        let ideas = ideas(content);
        assert_eq!(ideas.len(), 2);
        assert_eq!(ideas[1].title, "F");
    }

    #[test]
    fn no_brackets_yields_empty() {
        assert!(extract_ideas("I could not think of anything.").is_none());
        assert!(ideas("I could not think of anything.").is_empty());
    }

    #[test]
    fn trailing_bracket_in_prose_breaks_the_match() {
        let content = format!("{} (see [1])", ONE_IDEA);
        assert!(ideas(&content).is_empty());
    }

    #[test]
    fn fractional_score_is_rounded() {
        let content = r#"[{"title":"T","hook":"H","script":"S","hashtags":["a"],"viralityScore":88.5,"reasoning":"R"}]"#;
        let ideas = ideas(content);
        assert_eq!(ideas.len(), 1);
        assert_eq!(ideas[0].virality_score, 89);
    }

    #[test]
    fn missing_field_keeps_the_idea() {
        let content = r#"[
  {"title":"ok","hook":"h","script":"s","hashtags":[],"viralityScore":80,"reasoning":"r"},
  {"title":"partial","hook":"h","script":"s","hashtags":["x"],"viralityScore":70}
]"#;
        let ideas = ideas(content);
        assert_eq!(ideas.len(), 2);
        assert_eq!(ideas[1].title, "partial");
        assert_eq!(ideas[1].reasoning, "");
    }

    #[test]
    fn quoted_score_and_tag_string_are_coerced() {
        let content = r#"[{"title":"T","hook":"H","script":"S","hashtags":"a b","viralityScore":"91","reasoning":"R"}]"#;
        let ideas = ideas(content);
        assert_eq!(ideas[0].hashtags, vec!["a", "b"]);
        assert_eq!(ideas[0].virality_score, 91);
    }

    #[test]
    fn non_object_entries_discard_the_array() {
        assert!(extract_ideas(r#"["just a title", "another"]"#).is_none());
        assert!(extract_ideas(r#"[{"title":"T"}, 42]"#).is_none());
    }

    #[test]
    fn invalid_json_discards_the_array() {
        assert!(extract_ideas(r#"[{"title": "T",}]"#).is_none());
    }

    #[test]
    fn empty_array_is_a_valid_result() {
        assert_eq!(extract_ideas("[]"), Some(Vec::new()));
    }
}
