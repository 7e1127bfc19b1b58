//! Per-facet "still reachable" value computation.
//!
//! For a facet F the reachable values are those offered by islands that pass
//! every *other* active constraint. The UI hides a value that is neither
//! reachable nor currently selected; a selected value always stays visible so
//! the user can uncheck it.

use std::collections::{BTreeMap, BTreeSet};

use island_catalog::Catalog;
use island_protocol::RecommendationSet;

use crate::facet::{Facet, FacetValue};
use crate::matcher::matches;
use crate::selection::Selection;

/// Snapshot of reachable values per selectable facet. Recomputed fresh on
/// every selection/AI change; never mutated in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AvailabilityMap {
    values: BTreeMap<Facet, BTreeSet<FacetValue>>,
}

impl AvailabilityMap {
    pub fn get(&self, facet: Facet) -> Option<&BTreeSet<FacetValue>> {
        self.values.get(&facet)
    }

    pub fn is_available(&self, value: FacetValue) -> bool {
        self.values
            .get(&value.facet())
            .is_some_and(|set| set.contains(&value))
    }

    /// Whether a facet value should be offered in the UI: reachable, or
    /// already selected (a selected value is never force-deselected).
    pub fn is_visible(&self, value: FacetValue, selection: &Selection) -> bool {
        self.is_available(value) || selection.contains(value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Facet, &BTreeSet<FacetValue>)> {
        self.values.iter().map(|(&facet, set)| (facet, set))
    }
}

/// Compute the reachable values of every selectable facet.
///
/// Boolean flag facets are exempt: there is no "available boolean values"
/// concept.
pub fn available_values(
    catalog: &Catalog,
    selection: &Selection,
    ai: &RecommendationSet,
) -> AvailabilityMap {
    let mut values: BTreeMap<Facet, BTreeSet<FacetValue>> = BTreeMap::new();

    for facet in Facet::SELECTABLE {
        let reachable: BTreeSet<FacetValue> = catalog
            .iter()
            .filter(|island| matches(island, selection, ai, Some(facet)))
            .flat_map(|island| facet.island_values(island))
            .collect();
        values.insert(facet, reachable);
    }

    AvailabilityMap { values }
}

#[cfg(test)]
mod tests {
    use super::*;
    use island_catalog::{Atoll, Catalog, MarineActivity, Watersports};
    use island_protocol::{Recommendation, RecommendationSet};
    use pretty_assertions::assert_eq;

    fn catalog() -> Catalog {
        Catalog::builtin().unwrap()
    }

    #[test]
    fn unconstrained_availability_is_the_catalog_union() {
        let catalog = catalog();
        let avail = available_values(&catalog, &Selection::new(), &RecommendationSet::default());

        for facet in Facet::SELECTABLE {
            let expected: BTreeSet<FacetValue> = catalog
                .iter()
                .flat_map(|island| facet.island_values(island))
                .collect();
            assert_eq!(avail.get(facet), Some(&expected), "{facet}");
        }
    }

    #[test]
    fn other_facet_constraints_narrow_availability() {
        let catalog = catalog();
        let mut sel = Selection::new();
        sel.toggle(FacetValue::Atoll(Atoll::Baa));

        let avail = available_values(&catalog, &sel, &RecommendationSet::default());

        // Only Baa islands remain, and neither offers extensive watersports
        // beyond Dharavandhoo's.
        let watersports = avail.get(Facet::Watersports).unwrap();
        assert!(watersports.contains(&FacetValue::Watersports(Watersports::Extensive)));
        assert!(!watersports.contains(&FacetValue::Watersports(Watersports::Moderate)));

        // Nurse sharks are not offered by any Baa island.
        assert!(!avail.is_available(FacetValue::Marine(MarineActivity::NurseSharks)));
    }

    #[test]
    fn a_facets_own_selection_does_not_narrow_itself() {
        let catalog = catalog();
        let mut sel = Selection::new();
        sel.toggle(FacetValue::Atoll(Atoll::Vaavu));

        let avail = available_values(&catalog, &sel, &RecommendationSet::default());

        // Other atolls stay reachable: the atoll facet is evaluated with its
        // own constraint excluded.
        let atolls = avail.get(Facet::Atolls).unwrap();
        assert!(atolls.contains(&FacetValue::Atoll(Atoll::SouthMale)));
        assert!(atolls.contains(&FacetValue::Atoll(Atoll::Baa)));
    }

    #[test]
    fn ai_result_constrains_availability() {
        let catalog = catalog();
        let ai = RecommendationSet::new(vec![Recommendation {
            island_id: "fulidhoo".to_string(),
            reason: "sharks at the jetty".to_string(),
        }]);

        let avail = available_values(&catalog, &Selection::new(), &ai);
        let atolls = avail.get(Facet::Atolls).unwrap();
        assert_eq!(atolls.len(), 1);
        assert!(atolls.contains(&FacetValue::Atoll(Atoll::Vaavu)));
    }

    #[test]
    fn selected_but_unreachable_value_stays_visible() {
        let catalog = catalog();
        let mut sel = Selection::new();
        sel.toggle(FacetValue::Atoll(Atoll::Baa));
        sel.toggle(FacetValue::Marine(MarineActivity::NurseSharks));

        let avail = available_values(&catalog, &sel, &RecommendationSet::default());

        // No Baa island offers nurse sharks, but the value is selected.
        let value = FacetValue::Marine(MarineActivity::NurseSharks);
        assert!(!avail.is_available(value));
        assert!(avail.is_visible(value, &sel));

        // An unselected, unreachable value is hidden.
        assert!(!avail.is_visible(FacetValue::Marine(MarineActivity::Dolphins), &sel));
    }
}
