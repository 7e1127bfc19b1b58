//! Types shared across the catalog/filter/recommendation seams.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One ranked suggestion from the recommendation backend.
///
/// The wire names (`islandId`, `reason`) are fixed by the provider response
/// schema; this struct doubles as that schema's source of truth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub island_id: String,
    pub reason: String,
}

/// An ordered list of recommendations. Rank is the entry's index; at most one
/// entry per island id (the first occurrence wins). Replaced wholesale on
/// every search, never merged across searches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationSet {
    entries: Vec<Recommendation>,
}

impl RecommendationSet {
    pub fn new(raw: Vec<Recommendation>) -> Self {
        let mut entries: Vec<Recommendation> = Vec::with_capacity(raw.len());
        for rec in raw {
            if !entries.iter().any(|e| e.island_id == rec.island_id) {
                entries.push(rec);
            }
        }
        Self { entries }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn entries(&self) -> &[Recommendation] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &Recommendation> {
        self.entries.iter()
    }

    pub fn contains(&self, island_id: &str) -> bool {
        self.rank_of(island_id).is_some()
    }

    /// Relevance rank of an island, 0 = most relevant.
    pub fn rank_of(&self, island_id: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.island_id == island_id)
    }

    pub fn reason_for(&self, island_id: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.island_id == island_id)
            .map(|e| e.reason.as_str())
    }
}

impl FromIterator<Recommendation> for RecommendationSet {
    fn from_iter<T: IntoIterator<Item = Recommendation>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Search lifecycle state exposed to the result composer and the UI.
///
/// `NoMatches` and `Failed` are the two user-visible error conditions; both
/// force the result list empty until the next successful search or an
/// explicit clear.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchStatus {
    /// No search performed yet.
    #[default]
    Idle,
    /// A search is in flight; the previous result (if any) still applies.
    Loading,
    /// The last search returned at least one recommendation.
    Ready,
    /// The last search succeeded but matched nothing (includes policy refusals).
    NoMatches,
    /// The last search failed at the adapter boundary.
    Failed,
}

impl SearchStatus {
    /// Whether the error condition that empties the result list is active.
    pub fn error_present(self) -> bool {
        matches!(self, SearchStatus::NoMatches | SearchStatus::Failed)
    }

    pub fn is_loading(self) -> bool {
        matches!(self, SearchStatus::Loading)
    }

    /// The message shown alongside a forced-empty result list.
    pub fn user_message(self) -> Option<&'static str> {
        match self {
            SearchStatus::NoMatches => Some("We could not find an island. Repeat query."),
            SearchStatus::Failed => Some("An error occurred. Please try again."),
            _ => None,
        }
    }
}
