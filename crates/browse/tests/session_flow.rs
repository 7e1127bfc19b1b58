//! Search lifecycle and state-machine behavior of the browsing session.

use async_trait::async_trait;
use island_browse::{SearchOutcome, Session};
use island_catalog::{Atoll, Catalog};
use island_facets::{Facet, FacetValue};
use island_protocol::{Recommendation, SearchStatus};
use island_recommend::{IslandContext, MockBackend, RecommendBackend, RecommendError};
use pretty_assertions::assert_eq;

fn session() -> Session {
    Session::new(Catalog::builtin().unwrap())
}

fn rec(id: &str, reason: &str) -> Recommendation {
    Recommendation {
        island_id: id.to_string(),
        reason: reason.to_string(),
    }
}

#[test]
fn fresh_session_shows_the_whole_catalog() {
    let session = session();
    assert_eq!(session.status(), SearchStatus::Idle);
    assert_eq!(session.results().len(), session.catalog().len());
    assert_eq!(session.active_filter_count(), 0);
    assert!(session.error_message().is_none());
}

#[test]
fn filters_stay_usable_while_a_search_is_in_flight() {
    let mut session = session();
    session.begin_search();
    assert!(session.status().is_loading());

    // Interacting with filters during the flight recomputes against the
    // previous (empty) recommendation set.
    session.toggle(FacetValue::Atoll(Atoll::Vaavu));
    let ids: Vec<String> = session
        .results()
        .iter()
        .map(|r| r.island.id.clone())
        .collect();
    assert_eq!(ids, vec!["fulidhoo", "thinadhoo"]);
}

#[test]
fn previous_recommendations_survive_until_the_new_outcome() {
    let mut session = session();
    let generation = session.begin_search();
    session.apply_outcome(generation, SearchOutcome::Success(vec![rec("gulhi", "calm")]));
    assert_eq!(session.status(), SearchStatus::Ready);

    // A new search keeps the old result visible while loading.
    session.begin_search();
    assert!(session.status().is_loading());
    assert_eq!(session.recommendations().len(), 1);
    assert_eq!(session.results().len(), 1);
}

#[test]
fn stale_outcomes_are_ignored() {
    let mut session = session();
    let first = session.begin_search();
    let second = session.begin_search();

    // The slow first response arrives after the second dispatch.
    let status = session.apply_outcome(first, SearchOutcome::Success(vec![rec("gulhi", "old")]));
    assert_eq!(status, SearchStatus::Loading);
    assert!(session.recommendations().is_empty());

    let status = session.apply_outcome(
        second,
        SearchOutcome::Success(vec![rec("dhigurah", "new")]),
    );
    assert_eq!(status, SearchStatus::Ready);
    assert_eq!(session.recommendations().rank_of("dhigurah"), Some(0));
}

#[test]
fn empty_success_sets_no_matches_and_empties_results() {
    let mut session = session();
    let generation = session.begin_search();
    session.apply_outcome(generation, SearchOutcome::Success(Vec::new()));

    assert_eq!(session.status(), SearchStatus::NoMatches);
    assert!(session.results().is_empty());
    assert_eq!(
        session.error_message(),
        Some("We could not find an island. Repeat query.")
    );
}

#[test]
fn failure_sets_the_generic_error_and_empties_results() {
    let mut session = session();
    session.toggle(FacetValue::Atoll(Atoll::SouthMale));

    let generation = session.begin_search();
    session.apply_outcome(generation, SearchOutcome::Failure("boom".to_string()));

    assert_eq!(session.status(), SearchStatus::Failed);
    // Filters alone would match islands; the error still dominates.
    assert!(session.results().is_empty());
    assert_eq!(
        session.error_message(),
        Some("An error occurred. Please try again.")
    );
}

#[test]
fn a_later_successful_search_clears_the_error() {
    let mut session = session();
    let generation = session.begin_search();
    session.apply_outcome(generation, SearchOutcome::Failure("boom".to_string()));
    assert_eq!(session.status(), SearchStatus::Failed);

    let generation = session.begin_search();
    session.apply_outcome(generation, SearchOutcome::Success(vec![rec("ukulhas", "turtles")]));
    assert_eq!(session.status(), SearchStatus::Ready);
    assert!(session.error_message().is_none());

    let results = session.results();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].island.id, "ukulhas");
    assert_eq!(results[0].reason, Some("turtles"));
}

#[test]
fn clear_search_keeps_the_selection() {
    let mut session = session();
    session.toggle(FacetValue::Atoll(Atoll::Baa));
    let generation = session.begin_search();
    session.apply_outcome(generation, SearchOutcome::Success(vec![rec("dharavandhoo", "mantas")]));

    session.clear_search();
    assert_eq!(session.status(), SearchStatus::Idle);
    assert!(session.recommendations().is_empty());
    assert_eq!(session.active_filter_count(), 1);

    let ids: Vec<&str> = session.results().iter().map(|r| r.island.id.as_str()).collect();
    assert_eq!(ids, vec!["dharavandhoo", "fehendhoo"]);
}

#[test]
fn reset_all_reverts_everything() {
    let mut session = session();
    session.toggle(FacetValue::Atoll(Atoll::Baa));
    session.set_flag(Facet::FloatingBar, true);
    let generation = session.begin_search();
    session.apply_outcome(generation, SearchOutcome::Failure("boom".to_string()));

    session.reset_all();
    assert_eq!(session.status(), SearchStatus::Idle);
    assert_eq!(session.active_filter_count(), 0);
    assert!(session.error_message().is_none());
    assert_eq!(session.results().len(), session.catalog().len());
}

#[tokio::test]
async fn search_round_trip_with_a_scripted_backend() {
    let mut session = session();
    let backend = MockBackend::returning(vec![rec("thinadhoo", "empty beaches"), rec("gulhi", "calm")]);

    let status = session.search(&backend, "quiet island").await;
    assert_eq!(status, SearchStatus::Ready);
    assert_eq!(backend.call_count(), 1);

    let ids: Vec<&str> = session.results().iter().map(|r| r.island.id.as_str()).collect();
    assert_eq!(ids, vec!["thinadhoo", "gulhi"]);
}

#[tokio::test]
async fn search_failure_is_normalized() {
    let mut session = session();
    let backend = MockBackend::failing("connection refused");

    let status = session.search(&backend, "anything").await;
    assert_eq!(status, SearchStatus::Failed);
    assert!(session.results().is_empty());
}

#[tokio::test]
async fn missing_credential_behaves_like_no_matches() {
    struct Unconfigured;

    #[async_trait]
    impl RecommendBackend for Unconfigured {
        fn id(&self) -> &str {
            "unconfigured"
        }

        async fn recommend(
            &self,
            _query: &str,
            _context: &[IslandContext],
        ) -> island_recommend::Result<Vec<Recommendation>> {
            Err(RecommendError::MissingCredential("GEMINI_API_KEY"))
        }
    }

    let mut session = session();
    let status = session.search(&Unconfigured, "quiet island").await;
    assert_eq!(status, SearchStatus::NoMatches);
    assert!(session.results().is_empty());
}
