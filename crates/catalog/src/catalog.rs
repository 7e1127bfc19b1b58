//! The embedded island catalog.
//!
//! The data file is versioned and compiled into the binary; there is no
//! runtime reload. Island order in the file is the default display order
//! (grouped by atoll) and is preserved exactly.

use std::collections::HashMap;

use serde::Deserialize;

use crate::error::{CatalogError, Result};
use crate::types::Island;

const BUILTIN_DATA: &str = include_str!("../data/islands.toml");

#[derive(Debug, Deserialize)]
struct CatalogDoc {
    version: u32,
    #[serde(rename = "island")]
    islands: Vec<Island>,
}

/// Ordered, read-only island collection with id lookup.
#[derive(Debug, Clone)]
pub struct Catalog {
    version: u32,
    islands: Vec<Island>,
    by_id: HashMap<String, usize>,
}

impl Catalog {
    /// Parse and validate a catalog document.
    pub fn from_toml_str(doc: &str) -> Result<Self> {
        let doc: CatalogDoc = toml::from_str(doc)?;
        Self::build(doc.version, doc.islands)
    }

    /// The catalog compiled into the binary.
    pub fn builtin() -> Result<Self> {
        Self::from_toml_str(BUILTIN_DATA)
    }

    fn build(version: u32, islands: Vec<Island>) -> Result<Self> {
        let mut by_id = HashMap::with_capacity(islands.len());
        for (idx, island) in islands.iter().enumerate() {
            if by_id.insert(island.id.clone(), idx).is_some() {
                return Err(CatalogError::DuplicateId(island.id.clone()));
            }
            for activity in &island.seasonal_activities {
                if !island.marine_activities.contains(activity) {
                    return Err(CatalogError::SeasonalNotOffered {
                        island: island.id.clone(),
                        activity: activity.to_string(),
                    });
                }
            }
        }
        log::debug!("catalog v{}: {} islands", version, islands.len());
        Ok(Self {
            version,
            islands,
            by_id,
        })
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn len(&self) -> usize {
        self.islands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.islands.is_empty()
    }

    /// Islands in default display order.
    pub fn islands(&self) -> &[Island] {
        &self.islands
    }

    pub fn iter(&self) -> impl Iterator<Item = &Island> {
        self.islands.iter()
    }

    pub fn get(&self, id: &str) -> Option<&Island> {
        self.by_id.get(id).map(|&idx| &self.islands[idx])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn builtin_catalog_parses_and_validates() {
        let catalog = Catalog::builtin().expect("builtin catalog is valid");
        assert!(!catalog.is_empty());
        assert_eq!(catalog.version(), 1);

        // Every island is reachable by id and the index agrees with order.
        for island in catalog.iter() {
            assert_eq!(catalog.get(&island.id).map(|i| &i.name), Some(&island.name));
        }
    }

    #[test]
    fn builtin_order_is_grouped_by_atoll() {
        let catalog = Catalog::builtin().unwrap();
        let atolls: Vec<_> = catalog.iter().map(|i| i.atoll).collect();

        // Once an atoll's block ends it must not reappear later in the file.
        let mut seen = Vec::new();
        for atoll in atolls {
            match seen.last() {
                Some(&last) if last == atoll => {}
                _ => {
                    assert!(
                        !seen.contains(&atoll),
                        "atoll {atoll:?} appears in two separate blocks"
                    );
                    seen.push(atoll);
                }
            }
        }
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let doc = r#"
            version = 1

            [[island]]
            id = "gulhi"
            name = "Gulhi"
            atoll = "south_male"
            description = "d"
            image_url = "https://example.com/a.webp"
            dimensions = "0.6 km x 0.3 km"
            guest_house_count = 5
            transfer_types = ["speedboat_under_one_hour"]
            ferry_access = "direct"
            size = "small"
            atmosphere = ["quiet"]
            accommodations = []
            bikini_beach = "small"
            watersports = "moderate"
            marine_activities = ["turtles"]
            jungle = "medium"
            nightlife = "minimal"
            has_sandbank_attached = false
            has_floating_bar = false

            [[island]]
            id = "gulhi"
            name = "Gulhi Again"
            atoll = "south_male"
            description = "d"
            image_url = "https://example.com/b.webp"
            dimensions = "0.6 km x 0.3 km"
            guest_house_count = 5
            transfer_types = ["speedboat_under_one_hour"]
            ferry_access = "direct"
            size = "small"
            atmosphere = ["quiet"]
            accommodations = []
            bikini_beach = "small"
            watersports = "moderate"
            marine_activities = ["turtles"]
            jungle = "medium"
            nightlife = "minimal"
            has_sandbank_attached = false
            has_floating_bar = false
        "#;

        let err = Catalog::from_toml_str(doc).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(id) if id == "gulhi"));
    }

    #[test]
    fn seasonal_activity_must_be_offered() {
        let doc = r#"
            version = 1

            [[island]]
            id = "fulidhoo"
            name = "Fulidhoo"
            atoll = "vaavu"
            description = "d"
            image_url = "https://example.com/a.webp"
            dimensions = "0.5 km x 0.2 km"
            guest_house_count = 5
            transfer_types = ["speedboat_one_to_two_hours"]
            ferry_access = "direct"
            size = "small"
            atmosphere = ["quiet"]
            accommodations = []
            bikini_beach = "small"
            watersports = "moderate"
            marine_activities = ["turtles"]
            seasonal_activities = ["manta_rays"]
            jungle = "medium"
            nightlife = "minimal"
            has_sandbank_attached = false
            has_floating_bar = false
        "#;

        let err = Catalog::from_toml_str(doc).unwrap_err();
        assert!(matches!(err, CatalogError::SeasonalNotOffered { island, .. } if island == "fulidhoo"));
    }
}
