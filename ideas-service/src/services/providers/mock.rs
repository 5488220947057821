//! Scripted provider for tests and local development.

use super::{ProviderError, TextProvider};
use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};

enum Behaviour {
    Reply(String),
    Fail(u16),
}

/// Returns a fixed reply (or a fixed API error) and counts calls.
pub struct MockTextProvider {
    name: &'static str,
    behaviour: Behaviour,
    call_count: AtomicU64,
}

impl MockTextProvider {
    pub fn replying(name: &'static str, reply: impl Into<String>) -> Self {
        Self {
            name,
            behaviour: Behaviour::Reply(reply.into()),
            call_count: AtomicU64::new(0),
        }
    }

    pub fn failing(name: &'static str, status: u16) -> Self {
        Self {
            name,
            behaviour: Behaviour::Fail(status),
            call_count: AtomicU64::new(0),
        }
    }

    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TextProvider for MockTextProvider {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn complete(&self, prompt: &str) -> Result<String, ProviderError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);

        tracing::info!(
            provider = self.name,
            prompt_len = prompt.len(),
            "[MOCK] Completion requested"
        );

        match &self.behaviour {
            Behaviour::Reply(text) => Ok(text.clone()),
            Behaviour::Fail(status) => Err(ProviderError::Api {
                status: *status,
                body: "mock failure".to_string(),
            }),
        }
    }
}
