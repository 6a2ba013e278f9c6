use serde::{Deserialize, Serialize};

pub const DEFAULT_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Connection and sampling parameters for the Gemini backend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeminiSettings {
    /// Base URL the model path is appended to
    pub api_url: String,
    /// Model identifier, e.g. `gemini-1.5-flash`
    pub model: String,
    /// Per-request timeout
    pub timeout_secs: u64,
    pub temperature: f32,
    pub top_k: u32,
    pub top_p: f32,
    pub max_output_tokens: u32,
}

impl GeminiSettings {
    /// Full `generateContent` endpoint for the configured model
    pub fn endpoint(&self) -> String {
        format!(
            "{}/{}:generateContent",
            self.api_url.trim_end_matches('/'),
            self.model
        )
    }
}

impl Default for GeminiSettings {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout_secs: 60,
            temperature: 0.7,
            top_k: 40,
            top_p: 0.95,
            max_output_tokens: 2048,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_base_and_model() {
        let settings = GeminiSettings {
            api_url: "http://localhost:1234/".to_string(),
            ..GeminiSettings::default()
        };
        assert_eq!(
            settings.endpoint(),
            "http://localhost:1234/gemini-1.5-flash:generateContent"
        );
    }
}
