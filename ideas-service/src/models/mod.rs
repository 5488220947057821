pub mod idea;

pub use idea::{IdeaRequest, IdeaSource, VideoIdea};
