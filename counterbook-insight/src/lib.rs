//! Advisory boundary: trait, Gemini-backed advisor, and the refresh
//! coordinator that keeps the dashboard's insight board current.

mod advisor;
mod error;
mod gemini;
mod refresh;

pub use advisor::InsightAdvisor;
pub use error::{InsightError, InsightResult};
pub use gemini::{GeminiAdvisor, DEFAULT_ENDPOINT, DEFAULT_MODEL};
pub use refresh::{InsightRefresher, DEFAULT_REFRESH_TIMEOUT};
