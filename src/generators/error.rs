use serde::Serialize;
use thiserror::Error;

/// Why a generation call did not produce usable copy.
///
/// The `Display` text is the explanation shown to the user next to the
/// demo listing that replaces the failed one.
#[derive(Debug, Clone, Error, Serialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GenerationError {
    #[error("Invalid API key. Please check your Gemini API key in settings.")]
    Unauthorized,

    #[error("API access denied. Please verify your API key permissions.")]
    Forbidden,

    #[error("Rate limit exceeded. Please try again in a moment.")]
    RateLimited,

    #[error("{}", describe_api_error(.status, .message))]
    Api { status: u16, message: Option<String> },

    #[error("Network error: {message}")]
    Network { message: String },

    #[error("Invalid response format from Gemini API: {message}")]
    MalformedResponse { message: String },

    #[error("Content was filtered by safety settings. Try adjusting your property description.")]
    SafetyFiltered,

    #[error("No content generated. Please try again.")]
    EmptyContent,

    #[error("Generated content too short ({length} characters). Please try again.")]
    TooShort { length: usize },
}

fn describe_api_error(status: &u16, message: &Option<String>) -> String {
    match message {
        Some(message) => format!("API Error ({status}): {message}"),
        None => format!("API Error ({status})"),
    }
}

impl GenerationError {
    /// Map a non-success HTTP status to its error category
    pub fn from_status(status: u16, message: Option<String>) -> Self {
        match status {
            401 => Self::Unauthorized,
            403 => Self::Forbidden,
            429 => Self::RateLimited,
            _ => Self::Api { status, message },
        }
    }

    /// Whether repeating the same request could plausibly succeed
    pub fn is_transient(&self) -> bool {
        match self {
            Self::RateLimited | Self::Network { .. } => true,
            Self::Api { status, .. } => *status == 408 || *status >= 500,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_map_to_categories() {
        assert_eq!(GenerationError::from_status(401, None), GenerationError::Unauthorized);
        assert_eq!(GenerationError::from_status(403, None), GenerationError::Forbidden);
        assert_eq!(GenerationError::from_status(429, None), GenerationError::RateLimited);
        assert_eq!(
            GenerationError::from_status(500, Some("boom".into())),
            GenerationError::Api {
                status: 500,
                message: Some("boom".into())
            }
        );
    }

    #[test]
    fn api_error_message_is_appended_when_present() {
        let with = GenerationError::Api {
            status: 400,
            message: Some("Bad model".into()),
        };
        let without = GenerationError::Api {
            status: 400,
            message: None,
        };
        assert_eq!(with.to_string(), "API Error (400): Bad model");
        assert_eq!(without.to_string(), "API Error (400)");
    }

    #[test]
    fn only_transient_failures_are_retryable() {
        assert!(GenerationError::RateLimited.is_transient());
        assert!(GenerationError::Network {
            message: "reset".into()
        }
        .is_transient());
        assert!(GenerationError::Api {
            status: 503,
            message: None
        }
        .is_transient());
        assert!(!GenerationError::Unauthorized.is_transient());
        assert!(!GenerationError::SafetyFiltered.is_transient());
        assert!(!GenerationError::Api {
            status: 400,
            message: None
        }
        .is_transient());
    }

    #[test]
    fn serializes_with_kind_tag() {
        let json = serde_json::to_value(GenerationError::TooShort { length: 12 }).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "too_short", "length": 12}));
    }
}
