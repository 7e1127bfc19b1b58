//! Gemini recommendation backend.
//!
//! One `generateContent` call per search, JSON mode with a response schema
//! derived from [`Recommendation`]. All transport and provider failures are
//! normalized into [`RecommendError`] here; nothing leaks past the boundary.

use std::time::Duration;

use async_trait::async_trait;
use island_protocol::Recommendation;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::RecommendBackend;
use crate::context::IslandContext;
use crate::error::{RecommendError, Result};
use crate::prompt::build_prompt;

pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL: &str = "gemini-2.0-flash";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub struct GeminiBackend {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl GeminiBackend {
    pub fn new(api_key: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("failed to build HTTP client");

        Self {
            client,
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Read the credential from the environment.
    pub fn from_env() -> Result<Self> {
        match std::env::var(API_KEY_ENV) {
            Ok(key) if !key.trim().is_empty() => Ok(Self::new(key)),
            _ => Err(RecommendError::MissingCredential(API_KEY_ENV)),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Point at a different endpoint (test servers).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn generate_url(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
    response_schema: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

/// The provider-side schema for the returned array, derived from the
/// [`Recommendation`] wire type so the two can never drift apart.
fn response_schema() -> serde_json::Value {
    let item = schemars::schema_for!(Recommendation);
    let item = serde_json::to_value(item.schema).expect("schema serializes");
    serde_json::json!({ "type": "array", "items": item })
}

/// Parse the model's JSON-mode text into recommendations.
fn parse_recommendations(text: &str) -> Result<Vec<Recommendation>> {
    serde_json::from_str(text.trim()).map_err(|e| RecommendError::Parse(e.to_string()))
}

#[async_trait]
impl RecommendBackend for GeminiBackend {
    fn id(&self) -> &str {
        &self.model
    }

    async fn recommend(
        &self,
        query: &str,
        context: &[IslandContext],
    ) -> Result<Vec<Recommendation>> {
        let prompt =
            build_prompt(context, query).map_err(|e| RecommendError::Request(e.to_string()))?;

        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: response_schema(),
            },
        };

        log::debug!("recommendation request: model={}, query='{}'", self.model, query);

        let response = self
            .client
            .post(self.generate_url())
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await
            .map_err(|e| RecommendError::Request(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(RecommendError::Provider { status, body });
        }

        let body: GenerateResponse = response
            .json()
            .await
            .map_err(|e| RecommendError::Parse(e.to_string()))?;

        let text: String = body
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| RecommendError::Parse("no candidates in response".to_string()))?
            .content
            .parts
            .into_iter()
            .map(|p| p.text)
            .collect();

        let recommendations = parse_recommendations(&text)?;
        log::info!("recommendation response: {} entries", recommendations.len());
        Ok(recommendations)
    }
}
