//! Final result composition: filter, merge with AI ranking, order.

use island_catalog::{Catalog, Island};
use island_protocol::RecommendationSet;

use crate::matcher::matches;
use crate::selection::Selection;

/// One row of the final result list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedIsland<'a> {
    pub island: &'a Island,
    /// The AI-supplied reason, present only when the island appears in the
    /// current recommendation set.
    pub reason: Option<&'a str>,
}

/// Filter the catalog and order the survivors.
///
/// A flagged search error wins over everything: the list is forced empty so
/// the error message is never contradicted by visible results. Otherwise the
/// AI relevance order is authoritative when a recommendation set is present;
/// without one, catalog order is preserved.
pub fn compose<'a>(
    catalog: &'a Catalog,
    selection: &Selection,
    ai: &'a RecommendationSet,
    error_present: bool,
) -> Vec<MatchedIsland<'a>> {
    if error_present {
        return Vec::new();
    }

    let mut rows: Vec<MatchedIsland<'a>> = catalog
        .iter()
        .filter(|island| matches(island, selection, ai, None))
        .map(|island| MatchedIsland {
            island,
            reason: ai.reason_for(&island.id),
        })
        .collect();

    if !ai.is_empty() {
        // Every survivor passed the AI membership check, so rank_of is total
        // here; sort_by_key keeps the order stable regardless.
        rows.sort_by_key(|row| ai.rank_of(&row.island.id).unwrap_or(usize::MAX));
    }

    log::debug!(
        "composed {} of {} islands (ai={}, error={})",
        rows.len(),
        catalog.len(),
        !ai.is_empty(),
        error_present,
    );

    rows
}
