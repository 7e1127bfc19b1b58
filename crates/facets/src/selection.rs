//! The active filter selection.
//!
//! One set per facet; an empty set (or a false flag) means "no constraint".
//! The selection is a plain value: mutated only through `toggle`/`set_flag`,
//! replaced wholesale on reset, and passed by reference into the pure
//! computation functions.

use std::collections::BTreeSet;

use island_catalog::{
    Accommodation, Atmosphere, Atoll, BikiniBeach, FerryAccess, IslandSize, JungleVegetation,
    MarineActivity, Nightlife, TransferType, Watersports,
};
use serde::Serialize;

use crate::facet::{Facet, FacetValue};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Selection {
    pub atolls: BTreeSet<Atoll>,
    pub transfer_types: BTreeSet<TransferType>,
    pub ferry_access: BTreeSet<FerryAccess>,
    pub island_size: BTreeSet<IslandSize>,
    pub atmosphere: BTreeSet<Atmosphere>,
    pub accommodations: BTreeSet<Accommodation>,
    pub bikini_beach: BTreeSet<BikiniBeach>,
    pub watersports: BTreeSet<Watersports>,
    pub marine_activities: BTreeSet<MarineActivity>,
    pub jungle: BTreeSet<JungleVegetation>,
    pub nightlife: BTreeSet<Nightlife>,
    pub sandbank_attached: bool,
    pub floating_bar: bool,
}

impl Selection {
    /// All-empty selection: every island matches.
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle one value in or out of its facet's set.
    pub fn toggle(&mut self, value: FacetValue) {
        match value {
            FacetValue::Atoll(v) => toggle_in(&mut self.atolls, v),
            FacetValue::Transfer(v) => toggle_in(&mut self.transfer_types, v),
            FacetValue::Ferry(v) => toggle_in(&mut self.ferry_access, v),
            FacetValue::Size(v) => toggle_in(&mut self.island_size, v),
            FacetValue::Atmosphere(v) => toggle_in(&mut self.atmosphere, v),
            FacetValue::Accommodation(v) => toggle_in(&mut self.accommodations, v),
            FacetValue::BikiniBeach(v) => toggle_in(&mut self.bikini_beach, v),
            FacetValue::Watersports(v) => toggle_in(&mut self.watersports, v),
            FacetValue::Marine(v) => toggle_in(&mut self.marine_activities, v),
            FacetValue::Jungle(v) => toggle_in(&mut self.jungle, v),
            FacetValue::Nightlife(v) => toggle_in(&mut self.nightlife, v),
        }
    }

    pub fn contains(&self, value: FacetValue) -> bool {
        match value {
            FacetValue::Atoll(v) => self.atolls.contains(&v),
            FacetValue::Transfer(v) => self.transfer_types.contains(&v),
            FacetValue::Ferry(v) => self.ferry_access.contains(&v),
            FacetValue::Size(v) => self.island_size.contains(&v),
            FacetValue::Atmosphere(v) => self.atmosphere.contains(&v),
            FacetValue::Accommodation(v) => self.accommodations.contains(&v),
            FacetValue::BikiniBeach(v) => self.bikini_beach.contains(&v),
            FacetValue::Watersports(v) => self.watersports.contains(&v),
            FacetValue::Marine(v) => self.marine_activities.contains(&v),
            FacetValue::Jungle(v) => self.jungle.contains(&v),
            FacetValue::Nightlife(v) => self.nightlife.contains(&v),
        }
    }

    /// Set one of the two boolean feature flags.
    pub fn set_flag(&mut self, facet: Facet, on: bool) {
        match facet {
            Facet::SandbankAttached => self.sandbank_attached = on,
            Facet::FloatingBar => self.floating_bar = on,
            other => debug_assert!(false, "{other} is not a flag facet"),
        }
    }

    pub fn flag(&self, facet: Facet) -> bool {
        match facet {
            Facet::SandbankAttached => self.sandbank_attached,
            Facet::FloatingBar => self.floating_bar,
            _ => false,
        }
    }

    /// Drop every constraint on one facet.
    pub fn clear_facet(&mut self, facet: Facet) {
        match facet {
            Facet::Atolls => self.atolls.clear(),
            Facet::TransferTypes => self.transfer_types.clear(),
            Facet::FerryAccess => self.ferry_access.clear(),
            Facet::IslandSize => self.island_size.clear(),
            Facet::Atmosphere => self.atmosphere.clear(),
            Facet::Accommodations => self.accommodations.clear(),
            Facet::BikiniBeach => self.bikini_beach.clear(),
            Facet::Watersports => self.watersports.clear(),
            Facet::MarineActivities => self.marine_activities.clear(),
            Facet::Jungle => self.jungle.clear(),
            Facet::Nightlife => self.nightlife.clear(),
            Facet::SandbankAttached => self.sandbank_attached = false,
            Facet::FloatingBar => self.floating_bar = false,
        }
    }

    pub fn selected_count(&self, facet: Facet) -> usize {
        match facet {
            Facet::Atolls => self.atolls.len(),
            Facet::TransferTypes => self.transfer_types.len(),
            Facet::FerryAccess => self.ferry_access.len(),
            Facet::IslandSize => self.island_size.len(),
            Facet::Atmosphere => self.atmosphere.len(),
            Facet::Accommodations => self.accommodations.len(),
            Facet::BikiniBeach => self.bikini_beach.len(),
            Facet::Watersports => self.watersports.len(),
            Facet::MarineActivities => self.marine_activities.len(),
            Facet::Jungle => self.jungle.len(),
            Facet::Nightlife => self.nightlife.len(),
            Facet::SandbankAttached => usize::from(self.sandbank_attached),
            Facet::FloatingBar => usize::from(self.floating_bar),
        }
    }

    /// Total number of active constraints across all facets.
    pub fn active_count(&self) -> usize {
        Facet::ALL.iter().map(|&f| self.selected_count(f)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.active_count() == 0
    }
}

fn toggle_in<T: Ord>(set: &mut BTreeSet<T>, value: T) {
    if !set.remove(&value) {
        set.insert(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn toggle_adds_then_removes() {
        let mut sel = Selection::new();
        assert!(sel.is_empty());

        sel.toggle(FacetValue::Atoll(Atoll::Vaavu));
        assert!(sel.contains(FacetValue::Atoll(Atoll::Vaavu)));
        assert_eq!(sel.active_count(), 1);

        sel.toggle(FacetValue::Atoll(Atoll::Vaavu));
        assert!(sel.is_empty());
    }

    #[test]
    fn flags_count_as_one_constraint_when_set() {
        let mut sel = Selection::new();
        sel.set_flag(Facet::SandbankAttached, true);
        sel.set_flag(Facet::FloatingBar, true);
        assert_eq!(sel.active_count(), 2);

        sel.set_flag(Facet::FloatingBar, false);
        assert_eq!(sel.active_count(), 1);
    }

    #[test]
    fn clear_facet_only_touches_its_own_sets() {
        let mut sel = Selection::new();
        sel.toggle(FacetValue::Marine(MarineActivity::Turtles));
        sel.toggle(FacetValue::Marine(MarineActivity::MantaRays));
        sel.toggle(FacetValue::Size(IslandSize::Small));
        sel.set_flag(Facet::FloatingBar, true);

        sel.clear_facet(Facet::MarineActivities);
        assert_eq!(sel.selected_count(Facet::MarineActivities), 0);
        assert!(sel.contains(FacetValue::Size(IslandSize::Small)));
        assert!(sel.flag(Facet::FloatingBar));

        sel.clear_facet(Facet::FloatingBar);
        assert!(!sel.flag(Facet::FloatingBar));
    }
}
