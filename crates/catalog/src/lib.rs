mod catalog;
mod error;
mod types;

pub use catalog::Catalog;
pub use error::{CatalogError, Result};
pub use types::{
    Accommodation, Atmosphere, Atoll, BikiniBeach, FerryAccess, Island, IslandSize,
    JungleVegetation, MarineActivity, Nightlife, TransferType, Watersports,
};
