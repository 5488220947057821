//! Ordered provider chain with a local template fallback.

use super::fallback::fallback_ideas;
use super::metrics::{record_ideas_generated, record_provider_failure};
use super::parser::extract_ideas;
use super::prompt::build_prompt;
use super::providers::{AnthropicProvider, OpenAiProvider, TextProvider};
use crate::config::IdeasConfig;
use crate::models::{IdeaRequest, IdeaSource, VideoIdea};
use reqwest::Client;
use std::sync::Arc;

/// The ideas returned for one request, and who produced them.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationOutcome {
    pub ideas: Vec<VideoIdea>,
    pub source: IdeaSource,
}

/// Tries each provider once, in order, stopping at the first reply.
///
/// Holds no mutable state; one instance is shared by all requests.
#[derive(Clone)]
pub struct IdeaGenerator {
    providers: Vec<Arc<dyn TextProvider>>,
    fallback_on_unparseable: bool,
}

impl IdeaGenerator {
    pub fn new(providers: Vec<Arc<dyn TextProvider>>, fallback_on_unparseable: bool) -> Self {
        Self {
            providers,
            fallback_on_unparseable,
        }
    }

    /// Anthropic first, then OpenAI, each only when its key is configured.
    pub fn from_config(config: &IdeasConfig, client: Client) -> Self {
        let mut providers: Vec<Arc<dyn TextProvider>> = Vec::new();

        if config.anthropic.is_configured() {
            providers.push(Arc::new(AnthropicProvider::new(
                config.anthropic.clone(),
                client.clone(),
            )));
        }
        if config.openai.is_configured() {
            providers.push(Arc::new(OpenAiProvider::new(config.openai.clone(), client)));
        }

        Self::new(providers, config.generation.fallback_on_unparseable)
    }

    pub fn provider_names(&self) -> Vec<&'static str> {
        self.providers.iter().map(|p| p.name()).collect()
    }

    pub async fn generate(&self, request: &IdeaRequest) -> GenerationOutcome {
        let outcome = match self.try_providers(request).await {
            Some(outcome) => outcome,
            None => {
                tracing::info!(
                    niche = %request.niche,
                    "No provider reply available, using template ideas"
                );
                GenerationOutcome {
                    ideas: fallback_ideas(request),
                    source: IdeaSource::Fallback,
                }
            }
        };

        record_ideas_generated(outcome.source, outcome.ideas.len());
        outcome
    }

    async fn try_providers(&self, request: &IdeaRequest) -> Option<GenerationOutcome> {
        if self.providers.is_empty() {
            return None;
        }

        let prompt = build_prompt(request);

        for provider in &self.providers {
            let content = match provider.complete(&prompt).await {
                Ok(content) => content,
                Err(e) => {
                    tracing::warn!(provider = provider.name(), error = %e, "Provider call failed");
                    record_provider_failure(provider.name());
                    continue;
                }
            };

            let source = IdeaSource::Provider(provider.name());
            match extract_ideas(&content) {
                Some(ideas) if !ideas.is_empty() || !self.fallback_on_unparseable => {
                    tracing::info!(provider = provider.name(), count = ideas.len(), "Ideas generated");
                    return Some(GenerationOutcome { ideas, source });
                }
                _ if self.fallback_on_unparseable => {
                    tracing::warn!(
                        provider = provider.name(),
                        "Provider reply had no usable ideas, trying next strategy"
                    );
                    record_provider_failure(provider.name());
                }
                _ => {
                    tracing::warn!(
                        provider = provider.name(),
                        reply_len = content.len(),
                        "Provider reply had no usable ideas, returning empty list"
                    );
                    return Some(GenerationOutcome {
                        ideas: Vec::new(),
                        source,
                    });
                }
            }
        }

        None
    }
}
