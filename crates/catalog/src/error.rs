use thiserror::Error;

pub type Result<T> = std::result::Result<T, CatalogError>;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("failed to parse catalog data: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("duplicate island id: {0}")]
    DuplicateId(String),

    #[error("island '{island}' marks '{activity}' seasonal but does not offer it")]
    SeasonalNotOffered { island: String, activity: String },
}
