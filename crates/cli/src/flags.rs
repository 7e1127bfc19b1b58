//! Facet filter flags shared by the filter/ask/facets subcommands.
//!
//! Values use the same snake_case names as the catalog data file, parsed
//! through the enums' serde identifiers so the CLI and the data can never
//! disagree.

use std::collections::BTreeSet;

use clap::Args;
use island_browse::Session;
use island_catalog::{
    Accommodation, Atmosphere, Atoll, BikiniBeach, FerryAccess, IslandSize, JungleVegetation,
    MarineActivity, Nightlife, TransferType, Watersports,
};
use island_facets::{Facet, FacetValue};
use serde::de::DeserializeOwned;

#[derive(Args, Debug, Default)]
pub(crate) struct FilterArgs {
    /// Atoll (south_male, north_male, vaavu, north_ari, south_ari, baa)
    #[arg(long = "atoll", value_name = "ATOLL", value_parser = parse_enum::<Atoll>)]
    atolls: Vec<Atoll>,

    /// Transfer method (speedboat_under_one_hour, domestic_flight, ...)
    #[arg(long = "transfer", value_name = "TRANSFER", value_parser = parse_enum::<TransferType>)]
    transfer_types: Vec<TransferType>,

    /// Ferry access tier (direct, transfer, none)
    #[arg(long = "ferry", value_name = "FERRY", value_parser = parse_enum::<FerryAccess>)]
    ferry_access: Vec<FerryAccess>,

    /// Island size tier (small, medium, large)
    #[arg(long = "size", value_name = "SIZE", value_parser = parse_enum::<IslandSize>)]
    island_size: Vec<IslandSize>,

    /// Atmosphere tag (quiet, local, lively)
    #[arg(long = "atmosphere", value_name = "VIBE", value_parser = parse_enum::<Atmosphere>)]
    atmosphere: Vec<Atmosphere>,

    /// Required amenity; repeat to require several at once
    /// (affordable_luxury, pool, spa)
    #[arg(long = "accommodation", value_name = "AMENITY", value_parser = parse_enum::<Accommodation>)]
    accommodations: Vec<Accommodation>,

    /// Bikini beach size (small, medium, large)
    #[arg(long = "bikini-beach", value_name = "SIZE", value_parser = parse_enum::<BikiniBeach>)]
    bikini_beach: Vec<BikiniBeach>,

    /// Watersports tier (minimal, moderate, extensive)
    #[arg(long = "watersports", value_name = "TIER", value_parser = parse_enum::<Watersports>)]
    watersports: Vec<Watersports>,

    /// Marine activity (nurse_sharks, manta_rays, whale_sharks, turtles,
    /// dolphins, house_reef, sandbank_tours)
    #[arg(long = "marine", value_name = "ACTIVITY", value_parser = parse_enum::<MarineActivity>)]
    marine_activities: Vec<MarineActivity>,

    /// Jungle vegetation tier (minimal, medium, lush)
    #[arg(long = "jungle", value_name = "TIER", value_parser = parse_enum::<JungleVegetation>)]
    jungle: Vec<JungleVegetation>,

    /// Nightlife tier (minimal, moderate, lively)
    #[arg(long = "nightlife", value_name = "TIER", value_parser = parse_enum::<Nightlife>)]
    nightlife: Vec<Nightlife>,

    /// Only islands with an attached sandbank
    #[arg(long)]
    sandbank: bool,

    /// Only islands with a floating bar nearby
    #[arg(long = "floating-bar")]
    floating_bar: bool,
}

impl FilterArgs {
    /// Toggle every given value into the session's selection.
    pub(crate) fn apply(&self, session: &mut Session) {
        toggle_all(session, &self.atolls, FacetValue::Atoll);
        toggle_all(session, &self.transfer_types, FacetValue::Transfer);
        toggle_all(session, &self.ferry_access, FacetValue::Ferry);
        toggle_all(session, &self.island_size, FacetValue::Size);
        toggle_all(session, &self.atmosphere, FacetValue::Atmosphere);
        toggle_all(session, &self.accommodations, FacetValue::Accommodation);
        toggle_all(session, &self.bikini_beach, FacetValue::BikiniBeach);
        toggle_all(session, &self.watersports, FacetValue::Watersports);
        toggle_all(session, &self.marine_activities, FacetValue::Marine);
        toggle_all(session, &self.jungle, FacetValue::Jungle);
        toggle_all(session, &self.nightlife, FacetValue::Nightlife);

        if self.sandbank {
            session.set_flag(Facet::SandbankAttached, true);
        }
        if self.floating_bar {
            session.set_flag(Facet::FloatingBar, true);
        }
    }
}

/// Repeated flags are deduplicated first: toggling is an on/off switch, and
/// `--atoll vaavu --atoll vaavu` must not cancel itself out.
fn toggle_all<T: Ord + Copy>(session: &mut Session, values: &[T], wrap: impl Fn(T) -> FacetValue) {
    let unique: BTreeSet<T> = values.iter().copied().collect();
    for value in unique {
        session.toggle(wrap(value));
    }
}

fn parse_enum<T: DeserializeOwned>(raw: &str) -> Result<T, String> {
    serde_json::from_value(serde_json::Value::String(raw.trim().to_string()))
        .map_err(|_| format!("unknown value '{raw}'"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_parse_through_serde_names() {
        assert_eq!(parse_enum::<Atoll>("south_male").unwrap(), Atoll::SouthMale);
        assert_eq!(
            parse_enum::<TransferType>("speedboat_under_one_hour").unwrap(),
            TransferType::SpeedboatUnderOneHour
        );
        assert!(parse_enum::<Atoll>("atlantis").is_err());
    }

    #[test]
    fn duplicate_flags_do_not_cancel_out() {
        let args = FilterArgs {
            atolls: vec![Atoll::Vaavu, Atoll::Vaavu],
            ..Default::default()
        };

        let mut session = Session::new(island_catalog::Catalog::builtin().unwrap());
        args.apply(&mut session);
        assert!(session
            .selection()
            .contains(FacetValue::Atoll(Atoll::Vaavu)));
    }
}
