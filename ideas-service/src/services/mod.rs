pub mod fallback;
pub mod generator;
pub mod metrics;
pub mod parser;
pub mod prompt;
pub mod providers;

pub use fallback::fallback_ideas;
pub use generator::{GenerationOutcome, IdeaGenerator};
pub use providers::{ProviderError, TextProvider};
