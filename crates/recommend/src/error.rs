use thiserror::Error;

pub type Result<T> = std::result::Result<T, RecommendError>;

#[derive(Error, Debug)]
pub enum RecommendError {
    #[error("missing credential: {0} is not set")]
    MissingCredential(&'static str),

    #[error("recommendation request failed: {0}")]
    Request(String),

    #[error("provider returned HTTP {status}: {body}")]
    Provider { status: u16, body: String },

    #[error("failed to parse provider response: {0}")]
    Parse(String),
}
