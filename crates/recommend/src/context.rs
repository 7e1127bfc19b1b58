//! The catalog projection shipped to the recommendation backend.

use island_catalog::{Catalog, Island};
use serde::Serialize;

/// AI-visible subset of one island.
///
/// Presentation-only fields (image, video and guide links) are deliberately
/// absent: the model ranks, it does not render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IslandContext {
    pub id: String,
    pub name: String,
    pub atoll: String,
    pub description: String,
    /// Physical dimensions, for smallest/largest questions.
    pub size_details: String,
    /// Guest house count; the model uses it as a crowd proxy.
    pub hotel_count: u32,
    pub transfer_types: Vec<String>,
    pub size: String,
    pub atmosphere: Vec<String>,
    pub jungle: String,
    pub nightlife: String,
    pub marine_activities: Vec<String>,
    pub has_sandbank_attached: bool,
    pub has_floating_bar: bool,
}

impl From<&Island> for IslandContext {
    fn from(island: &Island) -> Self {
        Self {
            id: island.id.clone(),
            name: island.name.clone(),
            atoll: island.atoll.label().to_string(),
            description: island.description.clone(),
            size_details: island.dimensions.clone(),
            hotel_count: island.guest_house_count,
            transfer_types: island
                .transfer_types
                .iter()
                .map(|t| t.label().to_string())
                .collect(),
            size: island.size.label().to_string(),
            atmosphere: island
                .atmosphere
                .iter()
                .map(|a| a.label().to_string())
                .collect(),
            jungle: island.jungle.label().to_string(),
            nightlife: island.nightlife.label().to_string(),
            marine_activities: island
                .marine_activities
                .iter()
                .map(|m| m.label().to_string())
                .collect(),
            has_sandbank_attached: island.has_sandbank_attached,
            has_floating_bar: island.has_floating_bar,
        }
    }
}

/// Project the whole catalog, preserving catalog order.
pub fn catalog_context(catalog: &Catalog) -> Vec<IslandContext> {
    catalog.iter().map(IslandContext::from).collect()
}
