//! Local template generator used when no provider reply is available.
//!
//! Output depends only on the niche and trend strings: no clock, no
//! randomness, no I/O.

use crate::models::{IdeaRequest, VideoIdea};

/// Hashtag form of a niche: lower-cased with every whitespace character removed.
pub fn niche_slug(niche: &str) -> String {
    niche
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}

fn hashtags(slug: &str, rest: &[&str]) -> Vec<String> {
    std::iter::once(slug.to_string())
        .chain(rest.iter().map(|tag| tag.to_string()))
        .collect()
}

/// Produces the three template ideas for `request`.
pub fn fallback_ideas(request: &IdeaRequest) -> Vec<VideoIdea> {
    let niche = request.niche.as_str();
    let trend = request.trend();
    let slug = niche_slug(niche);
    let title_suffix = trend.map(|t| format!(" + {}", t)).unwrap_or_default();

    vec![
        secret_idea(niche, trend, &slug, &title_suffix),
        thirty_day_idea(niche, trend, &slug),
        mistakes_idea(niche, trend, &slug),
    ]
}

fn secret_idea(niche: &str, trend: Option<&str>, slug: &str, title_suffix: &str) -> VideoIdea {
    let hook = format!("Wait... this {} trick actually works?!", niche);
    let technique = trend.unwrap_or("the most effective technique");

    VideoIdea {
        title: format!("The {} Secret Nobody Tells You{}", niche, title_suffix),
        script: format!(
            "[0-3s] {hook}\n\n\
             [3-10s] So I discovered something crazy about {niche} that professionals don't want you to know.\n\n\
             [10-25s] Here's what I found: {technique} completely changes the game. I tested this for 30 days and the results were insane.\n\n\
             [25-35s] The key is doing THIS instead of what everyone else does. It's counterintuitive but it works.\n\n\
             [35-40s] Try it and let me know what happens!\n\n\
             [Visual: Fast cuts, dynamic text overlays, trending audio]"
        ),
        hook,
        hashtags: hashtags(
            slug,
            &["viral", "shorts", "fyp", "tutorial", "lifehack", "mindblown"],
        ),
        virality_score: 87,
        reasoning: format!(
            "This video leverages curiosity gaps, promises insider knowledge, and uses pattern interrupts. \
             The \"nobody tells you\" angle creates FOMO. Fast pacing and visual variety keeps retention high. \
             The {} niche is searchable and the format is proven to drive engagement.",
            niche
        ),
    }
}

fn thirty_day_idea(niche: &str, trend: Option<&str>, slug: &str) -> VideoIdea {
    let hook = format!("Day 1 vs Day 30 of {}... I can't believe this", niche);
    let technique = trend
        .map(|t| format!("involving {}", t))
        .unwrap_or_else(|| "that changed everything".to_string());

    VideoIdea {
        title: format!("I Tried {} For 30 Days... 🤯", niche),
        script: format!(
            "[0-3s] {hook}\n\n\
             [3-8s] At first, I was terrible. Like really bad.\n\n\
             [8-15s] But then I learned THIS one technique {technique}.\n\n\
             [15-28s] By day 15, I saw massive improvements. By day 30? I'm not even the same person. The transformation was wild.\n\n\
             [28-38s] Here's exactly what I did: [Quick 3-step breakdown with text overlay]\n\n\
             [38-45s] Comment \"DAY 1\" if you're starting today!\n\n\
             [Visual: Split screen before/after, progress montage, upbeat music]"
        ),
        hook,
        hashtags: hashtags(
            slug,
            &[
                "transformation",
                "30daychallenge",
                "beforeandafter",
                "progress",
                "motivated",
                "results",
            ],
        ),
        virality_score: 92,
        reasoning: "Transformation content performs exceptionally well. The day 1 vs day 30 format \
                    creates immediate visual interest. Viewers stay to see the results. The CTA to \
                    comment increases engagement signals, boosting algorithmic reach. Progress \
                    stories are inherently shareable."
            .to_string(),
    }
}

fn mistakes_idea(niche: &str, trend: Option<&str>, slug: &str) -> VideoIdea {
    let hook = format!("If you do {} like this, STOP immediately", niche);
    let trend_note = trend
        .map(|t| format!(" especially with {}", t))
        .unwrap_or_default();

    VideoIdea {
        title: format!("Why Everyone Gets {} Wrong", niche),
        script: format!(
            "[0-3s] {hook}\n\n\
             [3-9s] 99% of people make this mistake and wonder why they fail.\n\n\
             [9-18s] They do [common mistake] when they should be doing [correct method]{trend_note}.\n\n\
             [18-30s] I wasted 2 years doing it wrong. Then I learned the right way and everything clicked. Now I'm gonna save you years of frustration.\n\n\
             [30-40s] Here's the RIGHT way: [Clear demonstration or explanation]\n\n\
             [40-45s] Share this with someone who needs to see it!\n\n\
             [Visual: Red X over wrong method, green checkmark over right method, clear comparisons]"
        ),
        hook,
        hashtags: hashtags(
            slug,
            &["mistakes", "tutorial", "tips", "howto", "educational", "learn"],
        ),
        virality_score: 89,
        reasoning: "\"Everyone gets X wrong\" creates instant curiosity and taps into loss aversion - \
                    people want to avoid making mistakes. The educational angle provides value while \
                    the confrontational tone stops scrollers. Clear visual comparisons enhance \
                    understanding and shareability."
            .to_string(),
    }
}
