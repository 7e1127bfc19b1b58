//! Backends implementing the recommendation boundary.

mod gemini;
mod mock;

pub use gemini::GeminiBackend;
pub use mock::MockBackend;

use async_trait::async_trait;
use island_protocol::Recommendation;

use crate::context::IslandContext;
use crate::error::Result;

/// Abstraction over the external ranking service.
///
/// One call per search. An empty list is a valid outcome (no matches, or a
/// policy refusal; the two are indistinguishable by contract). Entry ids are
/// not validated against the catalog here: a dangling id simply never matches
/// anything downstream.
#[async_trait]
pub trait RecommendBackend: Send + Sync {
    /// Backend identifier (model name) for logs.
    fn id(&self) -> &str;

    /// Rank catalog islands against a free-text query, most relevant first.
    async fn recommend(
        &self,
        query: &str,
        context: &[IslandContext],
    ) -> Result<Vec<Recommendation>>;
}
