//! Facet value enums and the island record.
//!
//! Every enum here is a closed set of facet values. Variants carry their
//! human-readable label so the presentation layer never re-invents wording.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Atoll {
    SouthMale,
    NorthMale,
    Vaavu,
    NorthAri,
    SouthAri,
    Baa,
}

impl Atoll {
    pub const ALL: [Atoll; 6] = [
        Atoll::SouthMale,
        Atoll::NorthMale,
        Atoll::Vaavu,
        Atoll::NorthAri,
        Atoll::SouthAri,
        Atoll::Baa,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Atoll::SouthMale => "South Malé Atoll",
            Atoll::NorthMale => "North Malé Atoll",
            Atoll::Vaavu => "Vaavu Atoll",
            Atoll::NorthAri => "North Ari Atoll",
            Atoll::SouthAri => "South Ari Atoll",
            Atoll::Baa => "Baa Atoll",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransferType {
    SpeedboatUnderOneHour,
    SpeedboatOneToTwoHours,
    SpeedboatTwoToThreeHours,
    DomesticFlight,
    DomesticFlightSpeedboat,
}

impl TransferType {
    pub const ALL: [TransferType; 5] = [
        TransferType::SpeedboatUnderOneHour,
        TransferType::SpeedboatOneToTwoHours,
        TransferType::SpeedboatTwoToThreeHours,
        TransferType::DomesticFlight,
        TransferType::DomesticFlightSpeedboat,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            TransferType::SpeedboatUnderOneHour => "Speedboat (Up to 1 hr)",
            TransferType::SpeedboatOneToTwoHours => "Speedboat (Up to 2 hrs)",
            TransferType::SpeedboatTwoToThreeHours => "Speedboat (Up to 3 hrs)",
            TransferType::DomesticFlight => "Direct domestic flight only",
            TransferType::DomesticFlightSpeedboat => "Domestic flight + speedboat",
        }
    }
}

/// Public ferry access from Malé.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FerryAccess {
    Direct,
    Transfer,
    None,
}

impl FerryAccess {
    pub const ALL: [FerryAccess; 3] = [FerryAccess::Direct, FerryAccess::Transfer, FerryAccess::None];

    pub const fn label(self) -> &'static str {
        match self {
            FerryAccess::Direct => "Direct Ferry",
            FerryAccess::Transfer => "Requires Transfer",
            FerryAccess::None => "No Ferry Available",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IslandSize {
    Small,
    Medium,
    Large,
}

impl IslandSize {
    pub const ALL: [IslandSize; 3] = [IslandSize::Small, IslandSize::Medium, IslandSize::Large];

    pub const fn label(self) -> &'static str {
        match self {
            IslandSize::Small => "Small (< 500m)",
            IslandSize::Medium => "Medium (500m – 1.5km)",
            IslandSize::Large => "Large (> 1.5km)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Atmosphere {
    Quiet,
    Local,
    Lively,
}

impl Atmosphere {
    pub const ALL: [Atmosphere; 3] = [Atmosphere::Quiet, Atmosphere::Local, Atmosphere::Lively];

    pub const fn label(self) -> &'static str {
        match self {
            Atmosphere::Quiet => "Quiet & Peaceful",
            Atmosphere::Local => "Local & Authentic",
            Atmosphere::Lively => "Lively & Social",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Accommodation {
    AffordableLuxury,
    Pool,
    Spa,
}

impl Accommodation {
    pub const ALL: [Accommodation; 3] = [
        Accommodation::AffordableLuxury,
        Accommodation::Pool,
        Accommodation::Spa,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Accommodation::AffordableLuxury => "Affordable Luxury",
            Accommodation::Pool => "Hotel with Pool",
            Accommodation::Spa => "On-island Spa/Wellness",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BikiniBeach {
    Small,
    Medium,
    Large,
}

impl BikiniBeach {
    pub const ALL: [BikiniBeach; 3] = [BikiniBeach::Small, BikiniBeach::Medium, BikiniBeach::Large];

    pub const fn label(self) -> &'static str {
        match self {
            BikiniBeach::Small => "Small",
            BikiniBeach::Medium => "Medium",
            BikiniBeach::Large => "Large",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Watersports {
    Minimal,
    Moderate,
    Extensive,
}

impl Watersports {
    pub const ALL: [Watersports; 3] = [
        Watersports::Minimal,
        Watersports::Moderate,
        Watersports::Extensive,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Watersports::Minimal => "Minimal",
            Watersports::Moderate => "Moderate",
            Watersports::Extensive => "Extensive",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarineActivity {
    NurseSharks,
    MantaRays,
    WhaleSharks,
    Turtles,
    Dolphins,
    HouseReef,
    SandbankTours,
}

impl MarineActivity {
    pub const ALL: [MarineActivity; 7] = [
        MarineActivity::NurseSharks,
        MarineActivity::MantaRays,
        MarineActivity::WhaleSharks,
        MarineActivity::Turtles,
        MarineActivity::Dolphins,
        MarineActivity::HouseReef,
        MarineActivity::SandbankTours,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            MarineActivity::NurseSharks => "Snorkeling with Nurse Sharks",
            MarineActivity::MantaRays => "Manta Ray Snorkeling",
            MarineActivity::WhaleSharks => "Whale Shark Snorkeling",
            MarineActivity::Turtles => "Turtle Snorkeling",
            MarineActivity::Dolphins => "Dolphin Watching",
            MarineActivity::HouseReef => "House Reef Access",
            MarineActivity::SandbankTours => "Sandbank Tours",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JungleVegetation {
    Minimal,
    Medium,
    Lush,
}

impl JungleVegetation {
    pub const ALL: [JungleVegetation; 3] = [
        JungleVegetation::Minimal,
        JungleVegetation::Medium,
        JungleVegetation::Lush,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            JungleVegetation::Minimal => "Minimal Greenery",
            JungleVegetation::Medium => "Medium Greenery",
            JungleVegetation::Lush => "Lush Tropical Forest",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Nightlife {
    Minimal,
    Moderate,
    Lively,
}

impl Nightlife {
    pub const ALL: [Nightlife; 3] = [Nightlife::Minimal, Nightlife::Moderate, Nightlife::Lively];

    pub const fn label(self) -> &'static str {
        match self {
            Nightlife::Minimal => "Minimal (Quiet)",
            Nightlife::Moderate => "Moderate (BBQs/Events)",
            Nightlife::Lively => "Lively (DJ/Bars)",
        }
    }
}

macro_rules! display_via_label {
    ($($ty:ty),* $(,)?) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        })*
    };
}

display_via_label!(
    Atoll,
    TransferType,
    FerryAccess,
    IslandSize,
    Atmosphere,
    Accommodation,
    BikiniBeach,
    Watersports,
    MarineActivity,
    JungleVegetation,
    Nightlife,
);

/// One island in the catalog. Never mutated after the catalog is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Island {
    pub id: String,
    pub name: String,
    pub atoll: Atoll,
    pub description: String,
    pub image_url: String,
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default)]
    pub travel_guide_url: Option<String>,

    /// Detail fields shipped to the recommendation backend, never matched on.
    pub dimensions: String,
    pub guest_house_count: u32,

    pub transfer_types: BTreeSet<TransferType>,
    pub ferry_access: FerryAccess,
    pub size: IslandSize,
    pub atmosphere: BTreeSet<Atmosphere>,
    pub accommodations: BTreeSet<Accommodation>,
    pub bikini_beach: BikiniBeach,
    pub watersports: Watersports,
    pub marine_activities: BTreeSet<MarineActivity>,
    /// Activities from `marine_activities` that only run part of the year.
    #[serde(default)]
    pub seasonal_activities: BTreeSet<MarineActivity>,
    pub jungle: JungleVegetation,
    pub nightlife: Nightlife,

    pub has_sandbank_attached: bool,
    #[serde(default)]
    pub sandbank_is_seasonal: bool,
    pub has_floating_bar: bool,
}

impl Island {
    /// Whether `activity` is offered only seasonally on this island.
    pub fn is_seasonal(&self, activity: MarineActivity) -> bool {
        self.seasonal_activities.contains(&activity)
    }
}
