//! Facet identifiers and tagged facet values.
//!
//! Every filterable attribute category is one `Facet` variant. All dispatch
//! is a `match` on the tag; nothing in the filter path indexes properties by
//! name at runtime.

use std::fmt;

use island_catalog::{
    Accommodation, Atmosphere, Atoll, BikiniBeach, FerryAccess, Island, IslandSize,
    JungleVegetation, MarineActivity, Nightlife, TransferType, Watersports,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Facet {
    Atolls,
    TransferTypes,
    FerryAccess,
    IslandSize,
    Atmosphere,
    Accommodations,
    BikiniBeach,
    Watersports,
    MarineActivities,
    Jungle,
    Nightlife,
    SandbankAttached,
    FloatingBar,
}

impl Facet {
    pub const ALL: [Facet; 13] = [
        Facet::Atolls,
        Facet::TransferTypes,
        Facet::FerryAccess,
        Facet::IslandSize,
        Facet::Atmosphere,
        Facet::Accommodations,
        Facet::BikiniBeach,
        Facet::Watersports,
        Facet::MarineActivities,
        Facet::Jungle,
        Facet::Nightlife,
        Facet::SandbankAttached,
        Facet::FloatingBar,
    ];

    /// Facets with enumerable values. The two boolean flags are excluded:
    /// there is no availability concept for a flag.
    pub const SELECTABLE: [Facet; 11] = [
        Facet::Atolls,
        Facet::TransferTypes,
        Facet::FerryAccess,
        Facet::IslandSize,
        Facet::Atmosphere,
        Facet::Accommodations,
        Facet::BikiniBeach,
        Facet::Watersports,
        Facet::MarineActivities,
        Facet::Jungle,
        Facet::Nightlife,
    ];

    pub const fn is_flag(self) -> bool {
        matches!(self, Facet::SandbankAttached | Facet::FloatingBar)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Facet::Atolls => "atolls",
            Facet::TransferTypes => "transfer_types",
            Facet::FerryAccess => "ferry_access",
            Facet::IslandSize => "island_size",
            Facet::Atmosphere => "atmosphere",
            Facet::Accommodations => "accommodations",
            Facet::BikiniBeach => "bikini_beach",
            Facet::Watersports => "watersports",
            Facet::MarineActivities => "marine_activities",
            Facet::Jungle => "jungle",
            Facet::Nightlife => "nightlife",
            Facet::SandbankAttached => "sandbank_attached",
            Facet::FloatingBar => "floating_bar",
        }
    }

    /// Every value this facet can take, in display order. Empty for flags.
    pub fn options(self) -> Vec<FacetValue> {
        match self {
            Facet::Atolls => Atoll::ALL.iter().copied().map(FacetValue::Atoll).collect(),
            Facet::TransferTypes => TransferType::ALL
                .iter()
                .copied()
                .map(FacetValue::Transfer)
                .collect(),
            Facet::FerryAccess => FerryAccess::ALL
                .iter()
                .copied()
                .map(FacetValue::Ferry)
                .collect(),
            Facet::IslandSize => IslandSize::ALL
                .iter()
                .copied()
                .map(FacetValue::Size)
                .collect(),
            Facet::Atmosphere => Atmosphere::ALL
                .iter()
                .copied()
                .map(FacetValue::Atmosphere)
                .collect(),
            Facet::Accommodations => Accommodation::ALL
                .iter()
                .copied()
                .map(FacetValue::Accommodation)
                .collect(),
            Facet::BikiniBeach => BikiniBeach::ALL
                .iter()
                .copied()
                .map(FacetValue::BikiniBeach)
                .collect(),
            Facet::Watersports => Watersports::ALL
                .iter()
                .copied()
                .map(FacetValue::Watersports)
                .collect(),
            Facet::MarineActivities => MarineActivity::ALL
                .iter()
                .copied()
                .map(FacetValue::Marine)
                .collect(),
            Facet::Jungle => JungleVegetation::ALL
                .iter()
                .copied()
                .map(FacetValue::Jungle)
                .collect(),
            Facet::Nightlife => Nightlife::ALL
                .iter()
                .copied()
                .map(FacetValue::Nightlife)
                .collect(),
            Facet::SandbankAttached | Facet::FloatingBar => Vec::new(),
        }
    }

    /// The island's value(s) for this facet. Flags yield nothing; they are
    /// not part of the availability computation.
    pub fn island_values(self, island: &Island) -> Vec<FacetValue> {
        match self {
            Facet::Atolls => vec![FacetValue::Atoll(island.atoll)],
            Facet::TransferTypes => island
                .transfer_types
                .iter()
                .copied()
                .map(FacetValue::Transfer)
                .collect(),
            Facet::FerryAccess => vec![FacetValue::Ferry(island.ferry_access)],
            Facet::IslandSize => vec![FacetValue::Size(island.size)],
            Facet::Atmosphere => island
                .atmosphere
                .iter()
                .copied()
                .map(FacetValue::Atmosphere)
                .collect(),
            Facet::Accommodations => island
                .accommodations
                .iter()
                .copied()
                .map(FacetValue::Accommodation)
                .collect(),
            Facet::BikiniBeach => vec![FacetValue::BikiniBeach(island.bikini_beach)],
            Facet::Watersports => vec![FacetValue::Watersports(island.watersports)],
            Facet::MarineActivities => island
                .marine_activities
                .iter()
                .copied()
                .map(FacetValue::Marine)
                .collect(),
            Facet::Jungle => vec![FacetValue::Jungle(island.jungle)],
            Facet::Nightlife => vec![FacetValue::Nightlife(island.nightlife)],
            Facet::SandbankAttached | Facet::FloatingBar => Vec::new(),
        }
    }
}

impl fmt::Display for Facet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One facet value, tagged with the facet it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(untagged)]
pub enum FacetValue {
    Atoll(Atoll),
    Transfer(TransferType),
    Ferry(FerryAccess),
    Size(IslandSize),
    Atmosphere(Atmosphere),
    Accommodation(Accommodation),
    BikiniBeach(BikiniBeach),
    Watersports(Watersports),
    Marine(MarineActivity),
    Jungle(JungleVegetation),
    Nightlife(Nightlife),
}

impl FacetValue {
    pub const fn facet(self) -> Facet {
        match self {
            FacetValue::Atoll(_) => Facet::Atolls,
            FacetValue::Transfer(_) => Facet::TransferTypes,
            FacetValue::Ferry(_) => Facet::FerryAccess,
            FacetValue::Size(_) => Facet::IslandSize,
            FacetValue::Atmosphere(_) => Facet::Atmosphere,
            FacetValue::Accommodation(_) => Facet::Accommodations,
            FacetValue::BikiniBeach(_) => Facet::BikiniBeach,
            FacetValue::Watersports(_) => Facet::Watersports,
            FacetValue::Marine(_) => Facet::MarineActivities,
            FacetValue::Jungle(_) => Facet::Jungle,
            FacetValue::Nightlife(_) => Facet::Nightlife,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            FacetValue::Atoll(v) => v.label(),
            FacetValue::Transfer(v) => v.label(),
            FacetValue::Ferry(v) => v.label(),
            FacetValue::Size(v) => v.label(),
            FacetValue::Atmosphere(v) => v.label(),
            FacetValue::Accommodation(v) => v.label(),
            FacetValue::BikiniBeach(v) => v.label(),
            FacetValue::Watersports(v) => v.label(),
            FacetValue::Marine(v) => v.label(),
            FacetValue::Jungle(v) => v.label(),
            FacetValue::Nightlife(v) => v.label(),
        }
    }
}

impl fmt::Display for FacetValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
