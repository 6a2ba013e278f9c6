use crate::generators::traits::ListingGenerator;
use crate::generators::types::GeminiSettings;
use crate::generators::GenerationError;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

const API_KEY_HEADER: &str = "x-goog-api-key";
const SAFETY_THRESHOLD: &str = "BLOCK_MEDIUM_AND_ABOVE";

/// Gemini `generateContent` client
#[derive(Clone)]
pub struct GeminiGenerator {
    client: Client,
    api_key: String,
    settings: GeminiSettings,
}

impl std::fmt::Debug for GeminiGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiGenerator")
            .field("settings", &self.settings)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl GeminiGenerator {
    /// Create a new Gemini client with the given API key and settings
    pub fn new(api_key: impl Into<String>, settings: GeminiSettings) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            settings,
        })
    }

    pub fn settings(&self) -> &GeminiSettings {
        &self.settings
    }

    fn request_body<'a>(&self, prompt: &'a str) -> GenerateRequest<'a> {
        GenerateRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
            generation_config: GenerationConfig {
                temperature: self.settings.temperature,
                top_k: self.settings.top_k,
                top_p: self.settings.top_p,
                max_output_tokens: self.settings.max_output_tokens,
                stop_sequences: Vec::new(),
            },
            safety_settings: vec![
                SafetySetting {
                    category: "HARM_CATEGORY_HARASSMENT",
                    threshold: SAFETY_THRESHOLD,
                },
                SafetySetting {
                    category: "HARM_CATEGORY_HATE_SPEECH",
                    threshold: SAFETY_THRESHOLD,
                },
            ],
        }
    }
}

#[async_trait]
impl ListingGenerator for GeminiGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let url = self.settings.endpoint();
        debug!(model = %self.settings.model, prompt_chars = prompt.len(), "POST {}", url);

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&self.request_body(prompt))
            .send()
            .await
            .map_err(|e| GenerationError::Network {
                message: e.to_string(),
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| GenerationError::Network {
            message: format!("Failed to read response body: {}", e),
        })?;

        if !status.is_success() {
            warn!("Gemini returned status: {}", status);
            return Err(GenerationError::from_status(
                status.as_u16(),
                extract_error_message(&body),
            ));
        }

        let parsed: GenerateResponse =
            serde_json::from_str(&body).map_err(|e| GenerationError::MalformedResponse {
                message: e.to_string(),
            })?;

        extract_text(parsed)
    }

    fn provider_name(&self) -> &'static str {
        "Gemini"
    }
}

/// Pull the generated text out of the first candidate
fn extract_text(response: GenerateResponse) -> Result<String, GenerationError> {
    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| GenerationError::MalformedResponse {
            message: "no candidates in response".to_string(),
        })?;

    if candidate.finish_reason.as_deref() == Some("SAFETY") {
        return Err(GenerationError::SafetyFiltered);
    }

    let content = candidate
        .content
        .ok_or_else(|| GenerationError::MalformedResponse {
            message: "candidate has no content".to_string(),
        })?;

    content
        .parts
        .into_iter()
        .next()
        .and_then(|part| part.text)
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
        .ok_or(GenerationError::EmptyContent)
}

fn extract_error_message(body: &str) -> Option<String> {
    let parsed = serde_json::from_str::<serde_json::Value>(body).ok()?;
    parsed
        .get("error")
        .and_then(|error| error.get("message"))
        .and_then(|message| message.as_str())
        .map(ToOwned::to_owned)
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    contents: Vec<RequestContent<'a>>,
    generation_config: GenerationConfig,
    safety_settings: Vec<SafetySetting>,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    top_k: u32,
    top_p: f32,
    max_output_tokens: u32,
    stop_sequences: Vec<String>,
}

#[derive(Debug, Serialize)]
struct SafetySetting {
    category: &'static str,
    threshold: &'static str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}
