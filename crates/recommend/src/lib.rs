mod backend;
mod context;
mod error;
mod prompt;

pub use backend::{GeminiBackend, MockBackend, RecommendBackend};
pub use context::{catalog_context, IslandContext};
pub use error::{RecommendError, Result};
pub use prompt::build_prompt;
