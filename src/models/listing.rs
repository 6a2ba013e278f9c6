use chrono::{DateTime, Utc};
use serde::ser::{SerializeStruct, Serializer};
use serde::Serialize;
use std::time::Duration;

use crate::generators::GenerationError;

/// Outcome of generating copy for a single platform
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationResult {
    pub platform: String,
    pub content: String,
    /// Why the demo listing was used instead of generated copy
    pub fallback: Option<GenerationError>,
    pub generated_at: DateTime<Utc>,
}

impl GenerationResult {
    pub fn generated(platform: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            platform: platform.into(),
            content: content.into(),
            fallback: None,
            generated_at: Utc::now(),
        }
    }

    pub fn fallback(
        platform: impl Into<String>,
        content: impl Into<String>,
        reason: GenerationError,
    ) -> Self {
        Self {
            platform: platform.into(),
            content: content.into(),
            fallback: Some(reason),
            generated_at: Utc::now(),
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.fallback.is_some()
    }

    /// Human-readable failure explanation, if the fallback was used
    pub fn error_detail(&self) -> Option<String> {
        self.fallback.as_ref().map(ToString::to_string)
    }

    pub fn word_count(&self) -> usize {
        self.content.split_whitespace().count()
    }
}

// Serialized with the derived `is_fallback` flag and `error_detail` text
// alongside the tagged error, so saved listings explain themselves.
impl Serialize for GenerationResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("GenerationResult", 6)?;
        state.serialize_field("platform", &self.platform)?;
        state.serialize_field("content", &self.content)?;
        state.serialize_field("is_fallback", &self.is_fallback())?;
        state.serialize_field("error_detail", &self.error_detail())?;
        state.serialize_field("fallback", &self.fallback)?;
        state.serialize_field("generated_at", &self.generated_at)?;
        state.end()
    }
}

/// Derived statistics over the listings of a session
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct SessionStats {
    pub listing_count: usize,
    pub total_words: usize,
    pub generation_duration: Option<Duration>,
}

impl SessionStats {
    /// Duration in seconds with two decimals, as shown next to the results
    pub fn duration_label(&self) -> String {
        match self.generation_duration {
            Some(duration) => format!("{:.2}s", duration.as_secs_f64()),
            None => "-".to_string(),
        }
    }
}

/// Classification of a run by how many platforms fell back to demo copy
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RunOutcome {
    FullySuccessful,
    PartiallySuccessful,
    FullyDegraded,
}

impl RunOutcome {
    pub fn from_counts(fallbacks: usize, total: usize) -> Self {
        if fallbacks == 0 {
            Self::FullySuccessful
        } else if fallbacks < total {
            Self::PartiallySuccessful
        } else {
            Self::FullyDegraded
        }
    }
}

/// What a finished run reports back for status messaging
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RunSummary {
    pub outcome: RunOutcome,
    pub generated: usize,
    pub fallbacks: usize,
    pub duration: Duration,
    /// One "Platform: explanation" line per fallback
    pub errors: Vec<String>,
}

impl RunSummary {
    pub fn from_results(results: &[GenerationResult], duration: Duration) -> Self {
        let errors: Vec<String> = results
            .iter()
            .filter_map(|r| r.error_detail().map(|detail| format!("{}: {}", r.platform, detail)))
            .collect();
        let fallbacks = errors.len();

        Self {
            outcome: RunOutcome::from_counts(fallbacks, results.len()),
            generated: results.len() - fallbacks,
            fallbacks,
            duration,
            errors,
        }
    }

    pub fn status_message(&self) -> String {
        match self.outcome {
            RunOutcome::FullySuccessful => "🎉 All listings generated successfully!".to_string(),
            RunOutcome::PartiallySuccessful => format!(
                "✅ {} listings generated successfully! {} had issues but demo versions were created.",
                self.generated, self.fallbacks
            ),
            RunOutcome::FullyDegraded => {
                "⚠️ All listings are showing demo versions. Please check your API key and try again."
                    .to_string()
            }
        }
    }
}
