//! Scripted backend for tests and offline runs.

use std::sync::atomic::{AtomicU32, Ordering};

use async_trait::async_trait;
use island_protocol::Recommendation;

use super::RecommendBackend;
use crate::context::IslandContext;
use crate::error::{RecommendError, Result};

pub struct MockBackend {
    scripted: Vec<Recommendation>,
    fail_with: Option<String>,
    calls: AtomicU32,
}

impl MockBackend {
    /// Always answer with the given ranked list.
    pub fn returning(scripted: Vec<Recommendation>) -> Self {
        Self {
            scripted,
            fail_with: None,
            calls: AtomicU32::new(0),
        }
    }

    /// Always answer with zero matches.
    pub fn empty() -> Self {
        Self::returning(Vec::new())
    }

    /// Always fail at the transport layer.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            scripted: Vec::new(),
            fail_with: Some(message.into()),
            calls: AtomicU32::new(0),
        }
    }

    pub fn call_count(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RecommendBackend for MockBackend {
    fn id(&self) -> &str {
        "mock"
    }

    async fn recommend(
        &self,
        _query: &str,
        _context: &[IslandContext],
    ) -> Result<Vec<Recommendation>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.fail_with {
            Some(message) => Err(RecommendError::Request(message.clone())),
            None => Ok(self.scripted.clone()),
        }
    }
}
