use thiserror::Error;

/// Result alias for advisor operations.
pub type InsightResult<T> = Result<T, InsightError>;

/// Error type surfaced by insight advisors. Callers at the refresh
/// boundary absorb these into an empty advisory list.
#[derive(Debug, Error)]
pub enum InsightError {
    #[error("transport error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("malformed advisor response: {0}")]
    Malformed(String),
    #[error("advisor returned no candidates")]
    EmptyResponse,
}

impl From<serde_json::Error> for InsightError {
    fn from(value: serde_json::Error) -> Self {
        Self::Malformed(value.to_string())
    }
}
