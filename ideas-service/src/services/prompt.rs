//! Prompt sent to whichever text provider handles a request.
//!
//! The reply parser only needs two things from the model: a JSON array, and
//! objects carrying the six `VideoIdea` keys. Everything else is guidance.

use crate::models::IdeaRequest;

/// Number of ideas requested from a provider.
pub const IDEAS_PER_REQUEST: usize = 3;

const RESPONSE_FORMAT: &str = r#"Format your response as a JSON array:
[
  {
    "title": "...",
    "hook": "...",
    "script": "...",
    "hashtags": ["tag1", "tag2", ...],
    "viralityScore": 85,
    "reasoning": "..."
  }
]"#;

const STYLE_REQUIREMENTS: &str = "Make the ideas:
- Attention-grabbing from the very first second
- Easy to produce (no complex equipment needed)
- Emotionally engaging or surprising
- Shareable and relatable
- Optimized for the vertical 9:16 format
- Under 60 seconds total duration";

/// Builds the generation prompt for a validated request.
pub fn build_prompt(request: &IdeaRequest) -> String {
    let trend_clause = request
        .trend()
        .map(|trend| format!(" with the current trend: \"{}\"", trend))
        .unwrap_or_default();

    format!(
        "You are an expert in viral YouTube Shorts. Generate {count} highly viral video ideas \
for the niche: \"{niche}\"{trend_clause}.

For each idea, provide:
1. A catchy, click-worthy title (under 60 characters)
2. A hook for the first 3 seconds that stops the scroll
3. A complete 30-45 second script with pacing notes
4. 5-7 relevant hashtags
5. A virality score (70-95%)
6. Reasoning that explains why this will go viral

{format}

{style}",
        count = IDEAS_PER_REQUEST,
        niche = request.niche,
        trend_clause = trend_clause,
        format = RESPONSE_FORMAT,
        style = STYLE_REQUIREMENTS,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(niche: &str, trend: Option<&str>) -> IdeaRequest {
        IdeaRequest::new(Some(niche.to_string()), trend.map(str::to_string)).unwrap()
    }

    #[test]
    fn names_every_output_key_and_asks_for_an_array() {
        let prompt = build_prompt(&request("Cooking", None));

        for key in ["title", "hook", "script", "hashtags", "viralityScore", "reasoning"] {
            assert!(prompt.contains(&format!("\"{}\"", key)), "missing key {}", key);
        }
        assert!(prompt.contains("JSON array"));
        assert!(prompt.contains("Generate 3 highly viral video ideas"));
        assert!(prompt.contains("Under 60 seconds"));
        assert!(prompt.contains("A virality score (70-95%)"));
    }

    #[test]
    fn trend_clause_only_when_present() {
        let without = build_prompt(&request("Fitness", None));
        assert!(without.contains("for the niche: \"Fitness\"."));
        assert!(!without.contains("current trend"));

        let with = build_prompt(&request("Fitness", Some("AI Tools")));
        assert!(with.contains("for the niche: \"Fitness\" with the current trend: \"AI Tools\"."));
    }
}
