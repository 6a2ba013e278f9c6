use crate::error::InputError;
use crate::generators::types::{DEFAULT_API_URL, DEFAULT_MODEL};
use crate::generators::{GeminiSettings, RetryPolicy};
use anyhow::{Context, Result};
use std::time::Duration;

const API_KEY_PREFIX: &str = "AIza";
const MIN_API_KEY_LEN: usize = 30;

/// Application configuration loaded from environment variables
#[derive(Clone)]
pub struct AppConfig {
    pub api_key: String,
    pub gemini: GeminiSettings,
    pub max_attempts: u32,
    pub retry_delay: Duration,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("api_key", &"[REDACTED]")
            .field("gemini", &self.gemini)
            .field("max_attempts", &self.max_attempts)
            .field("retry_delay", &self.retry_delay)
            .finish()
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from any key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("GEMINI_API_KEY")
            .map(|key| key.trim().to_string())
            .unwrap_or_default();
        validate_api_key(&api_key)?;

        let defaults = GeminiSettings::default();
        let gemini = GeminiSettings {
            api_url: lookup("GEMINI_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            model: lookup("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            timeout_secs: lookup("LISTING_TIMEOUT_SECS")
                .map(|v| v.parse::<u64>())
                .transpose()
                .context("LISTING_TIMEOUT_SECS must be a valid number")?
                .unwrap_or(defaults.timeout_secs),
            ..defaults
        };

        let max_attempts = lookup("LISTING_MAX_ATTEMPTS")
            .map(|v| v.parse::<u32>())
            .transpose()
            .context("LISTING_MAX_ATTEMPTS must be a valid number")?
            .unwrap_or(1);
        let retry_delay_ms = lookup("LISTING_RETRY_DELAY_MS")
            .map(|v| v.parse::<u64>())
            .transpose()
            .context("LISTING_RETRY_DELAY_MS must be a valid number")?
            .unwrap_or(1000);

        Ok(Self {
            api_key,
            gemini,
            max_attempts,
            retry_delay: Duration::from_millis(retry_delay_ms),
        })
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(self.max_attempts, self.retry_delay)
    }
}

/// Basic shape check for a Gemini API key
pub fn validate_api_key(key: &str) -> Result<(), InputError> {
    if key.is_empty() {
        return Err(InputError::MissingApiKey);
    }
    if !key.starts_with(API_KEY_PREFIX) || key.len() < MIN_API_KEY_LEN {
        return Err(InputError::InvalidApiKey);
    }
    Ok(())
}
