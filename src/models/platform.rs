use serde::{Deserialize, Serialize};

const GENERIC_REQUIREMENTS: &str = "Create a balanced listing that appeals to a broad audience with clear details and compelling language.";

/// Publishing target with its own tone and requirement profile
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Platform {
    pub name: String,
    /// What the copy for this platform should lean on
    pub focus: String,
    /// Requirement text that overrides the built-in one for this name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specific_requirements: Option<String>,
}

impl Platform {
    pub fn new(name: impl Into<String>, focus: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            focus: focus.into(),
            specific_requirements: None,
        }
    }

    pub fn with_requirements(mut self, requirements: impl Into<String>) -> Self {
        self.specific_requirements = Some(requirements.into());
        self
    }

    /// The fixed set of platforms every run generates for
    pub fn defaults() -> Vec<Platform> {
        vec![
            Platform::new("Zillow", "comprehensive details and buyer appeal"),
            Platform::new("Redfin", "data-driven insights and neighborhood highlights"),
            Platform::new("Agent Website", "personal touch and unique selling points"),
        ]
    }

    /// Platform-tailored instructions: the platform's own text if it carries
    /// one, otherwise the built-in text for its name
    pub fn requirements(&self) -> &str {
        if let Some(requirements) = &self.specific_requirements {
            return requirements;
        }
        match self.name.as_str() {
            "Zillow" => "Create a comprehensive listing optimized for search. Include bullet points for key features, emphasize neighborhood benefits, and focus on factors that help buyers make decisions quickly. Use keywords that buyers commonly search for.",
            "Redfin" => "Emphasize data-driven insights, market trends, walkability scores, and practical details. Tech-savvy buyers appreciate specifics about efficiency, smart home features, and investment potential.",
            "Agent Website" => "Create a personalized listing that tells the property's story. Build emotional connection, emphasize unique selling points, and showcase your local expertise. Make it feel exclusive and special.",
            _ => GENERIC_REQUIREMENTS,
        }
    }
}
