//! The facet match predicate.

use std::collections::BTreeSet;

use island_catalog::Island;
use island_protocol::RecommendationSet;

use crate::facet::Facet;
use crate::selection::Selection;

/// Decide whether `island` passes the active selection.
///
/// When `ai` is non-empty the island must appear in it; that constraint is
/// always enforced and is never subject to `excluded`. Every other facet is
/// checked conjunctively, skipping `excluded` when given (used by the
/// availability computation to answer "what if this facet weren't
/// constrained").
///
/// Pure: no side effects, no input mutation.
pub fn matches(
    island: &Island,
    selection: &Selection,
    ai: &RecommendationSet,
    excluded: Option<Facet>,
) -> bool {
    if !ai.is_empty() && !ai.contains(&island.id) {
        return false;
    }

    Facet::ALL
        .iter()
        .filter(|&&facet| Some(facet) != excluded)
        .all(|&facet| facet_passes(facet, island, selection))
}

fn facet_passes(facet: Facet, island: &Island, sel: &Selection) -> bool {
    match facet {
        Facet::Atolls => one_of(&island.atoll, &sel.atolls),
        Facet::TransferTypes => any_overlap(&island.transfer_types, &sel.transfer_types),
        Facet::FerryAccess => one_of(&island.ferry_access, &sel.ferry_access),
        Facet::IslandSize => one_of(&island.size, &sel.island_size),
        Facet::Atmosphere => any_overlap(&island.atmosphere, &sel.atmosphere),
        // Accommodations are the one AND facet: the island must offer every
        // requested amenity, not just one.
        Facet::Accommodations => sel.accommodations.is_subset(&island.accommodations),
        Facet::BikiniBeach => one_of(&island.bikini_beach, &sel.bikini_beach),
        Facet::Watersports => one_of(&island.watersports, &sel.watersports),
        Facet::MarineActivities => any_overlap(&island.marine_activities, &sel.marine_activities),
        Facet::Jungle => one_of(&island.jungle, &sel.jungle),
        Facet::Nightlife => one_of(&island.nightlife, &sel.nightlife),
        Facet::SandbankAttached => !sel.sandbank_attached || island.has_sandbank_attached,
        Facet::FloatingBar => !sel.floating_bar || island.has_floating_bar,
    }
}

/// Single-valued attribute vs. multi-valued selection: empty passes,
/// otherwise the attribute must be one of the selected values.
fn one_of<T: Ord>(value: &T, selected: &BTreeSet<T>) -> bool {
    selected.is_empty() || selected.contains(value)
}

/// Multi-valued attribute vs. multi-valued selection, OR semantics: empty
/// passes, otherwise at least one selected value must be offered.
fn any_overlap<T: Ord>(values: &BTreeSet<T>, selected: &BTreeSet<T>) -> bool {
    selected.is_empty() || !selected.is_disjoint(values)
}
