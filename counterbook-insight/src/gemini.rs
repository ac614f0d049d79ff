use counterbook_core::{DashboardStats, Insight, Transaction};
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::{InsightAdvisor, InsightError, InsightResult};

pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

/// Advisor backed by the Gemini `generateContent` API.
///
/// The request constrains the response to a JSON array of
/// `{title, description, type}` objects, so a well-behaved reply can be
/// deserialized straight into `Vec<Insight>`.
pub struct GeminiAdvisor {
    client: Client,
    endpoint: String,
    model: String,
    api_key: String,
}

impl GeminiAdvisor {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_endpoint(api_key, DEFAULT_ENDPOINT, DEFAULT_MODEL)
    }

    pub fn with_endpoint(
        api_key: impl Into<String>,
        endpoint: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
            model: model.into(),
            api_key: api_key.into(),
        }
    }

    fn request_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.endpoint.trim_end_matches('/'),
            self.model
        )
    }
}

#[async_trait::async_trait]
impl InsightAdvisor for GeminiAdvisor {
    async fn generate(
        &self,
        stats: &DashboardStats,
        transactions: &[Transaction],
    ) -> InsightResult<Vec<Insight>> {
        let prompt = build_prompt(stats, transactions);
        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": {
                    "type": "ARRAY",
                    "items": {
                        "type": "OBJECT",
                        "properties": {
                            "title": { "type": "STRING" },
                            "description": { "type": "STRING" },
                            "type": { "type": "STRING" },
                        },
                        "required": ["title", "description", "type"],
                    },
                },
            },
        });

        debug!(model = %self.model, transactions = transactions.len(), "requesting insights");
        let response = self
            .client
            .post(self.request_url())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?
            .error_for_status()?
            .json::<GenerateContentResponse>()
            .await?;

        parse_insights(&extract_text(response)?)
    }
}

/// Render the analyst prompt fed to the model.
fn build_prompt(stats: &DashboardStats, transactions: &[Transaction]) -> String {
    let mut lines = String::new();
    for tx in transactions {
        lines.push_str(&format!("{}: ₹{} ({})\n", tx.customer, tx.amount, tx.status));
    }
    format!(
        "Act as a professional business analyst for a \"Common Service Center\" (CSC).\n\
         Based on the following data, provide 3 short, actionable business insights or warnings.\n\n\
         Current Stats:\n\
         - Daily Sales: ₹{}\n\
         - Total Cash in Hand: ₹{}\n\
         - Sales Returns: ₹{}\n\n\
         Recent Transactions:\n{lines}\n\
         Format the response as JSON with an array of objects containing \
         'title', 'description', and 'type' (success, warning, or info).",
        stats.daily_sales, stats.total_cash, stats.sales_returns,
    )
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

fn extract_text(response: GenerateContentResponse) -> InsightResult<String> {
    response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content.parts.into_iter().next())
        .map(|part| part.text)
        .ok_or(InsightError::EmptyResponse)
}

fn parse_insights(text: &str) -> InsightResult<Vec<Insight>> {
    Ok(serde_json::from_str(text)?)
}
