//! Single-owner browsing session.
//!
//! The session is the only holder of mutable state: the selection, the
//! current recommendation set, the search status and the request generation.
//! Each piece is swapped wholesale, so the derived computations (results,
//! availability) always read a consistent snapshot. The only suspend point
//! is the backend call inside [`Session::search`]; filter mutation stays
//! usable while one is in flight and recomputes against the previous
//! recommendation set.

use island_catalog::Catalog;
use island_facets::{
    available_values, compose, AvailabilityMap, Facet, FacetValue, MatchedIsland, Selection,
};
use island_protocol::{Recommendation, RecommendationSet, SearchStatus};
use island_recommend::{catalog_context, RecommendBackend, RecommendError};

/// Terminal outcome of one search, applied together with its generation.
#[derive(Debug, Clone)]
pub enum SearchOutcome {
    /// The backend answered; an empty list means "no matches" (including
    /// policy refusals).
    Success(Vec<Recommendation>),
    /// The backend failed; the message is log-only, users get the generic
    /// error text.
    Failure(String),
}

pub struct Session {
    catalog: Catalog,
    selection: Selection,
    recommendations: RecommendationSet,
    status: SearchStatus,
    generation: u64,
}

impl Session {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            selection: Selection::new(),
            recommendations: RecommendationSet::default(),
            status: SearchStatus::Idle,
            generation: 0,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn recommendations(&self) -> &RecommendationSet {
        &self.recommendations
    }

    pub fn status(&self) -> SearchStatus {
        self.status
    }

    /// Toggle one facet value in or out of the selection.
    pub fn toggle(&mut self, value: FacetValue) {
        self.selection.toggle(value);
    }

    /// Flip one of the boolean feature flags.
    pub fn set_flag(&mut self, facet: Facet, on: bool) {
        self.selection.set_flag(facet, on);
    }

    /// Start a new search. The previous recommendation set stays in place
    /// until the outcome resolves; any earlier in-flight search is
    /// superseded by the bumped generation.
    pub fn begin_search(&mut self) -> u64 {
        self.generation += 1;
        self.status = SearchStatus::Loading;
        self.generation
    }

    /// Apply a search outcome. Outcomes whose generation is not the latest
    /// dispatched one are ignored so a slow response can never overwrite a
    /// newer search.
    pub fn apply_outcome(&mut self, generation: u64, outcome: SearchOutcome) -> SearchStatus {
        if generation != self.generation {
            log::debug!(
                "ignoring stale search outcome (generation {generation}, latest {})",
                self.generation
            );
            return self.status;
        }

        match outcome {
            SearchOutcome::Success(recs) if recs.is_empty() => {
                self.recommendations = RecommendationSet::default();
                self.status = SearchStatus::NoMatches;
            }
            SearchOutcome::Success(recs) => {
                let set = RecommendationSet::new(recs);
                for entry in set.iter() {
                    if !self.catalog.contains(&entry.island_id) {
                        log::debug!(
                            "recommendation references unknown island '{}'",
                            entry.island_id
                        );
                    }
                }
                self.recommendations = set;
                self.status = SearchStatus::Ready;
            }
            SearchOutcome::Failure(message) => {
                log::debug!("search failed: {message}");
                self.recommendations = RecommendationSet::default();
                self.status = SearchStatus::Failed;
            }
        }

        self.status
    }

    /// Run one full search round trip against a backend.
    ///
    /// A missing credential is treated as an empty answer per the adapter
    /// contract: logged, not surfaced distinctly to the user.
    pub async fn search(&mut self, backend: &dyn RecommendBackend, query: &str) -> SearchStatus {
        let generation = self.begin_search();
        let context = catalog_context(&self.catalog);

        let outcome = match backend.recommend(query, &context).await {
            Ok(recs) => SearchOutcome::Success(recs),
            Err(RecommendError::MissingCredential(var)) => {
                log::warn!("recommendation backend disabled: {var} is not set");
                SearchOutcome::Success(Vec::new())
            }
            Err(err) => {
                log::warn!("recommendation search failed: {err}");
                SearchOutcome::Failure(err.to_string())
            }
        };

        self.apply_outcome(generation, outcome)
    }

    /// Drop the AI result and error state, keeping the facet selection.
    pub fn clear_search(&mut self) {
        self.recommendations = RecommendationSet::default();
        self.status = SearchStatus::Idle;
    }

    /// Back to the initial state: empty selection, no AI result, no error.
    pub fn reset_all(&mut self) {
        self.selection = Selection::new();
        self.clear_search();
    }

    /// The composed result list for the current snapshot.
    pub fn results(&self) -> Vec<MatchedIsland<'_>> {
        compose(
            &self.catalog,
            &self.selection,
            &self.recommendations,
            self.status.error_present(),
        )
    }

    /// Reachable values per facet for the current snapshot.
    pub fn availability(&self) -> AvailabilityMap {
        available_values(&self.catalog, &self.selection, &self.recommendations)
    }

    pub fn active_filter_count(&self) -> usize {
        self.selection.active_count()
    }

    pub fn has_active_filters_or_ai(&self) -> bool {
        self.active_filter_count() > 0 || !self.recommendations.is_empty()
    }

    /// The message to display when the error condition forces an empty list.
    pub fn error_message(&self) -> Option<&'static str> {
        self.status.user_message()
    }
}
