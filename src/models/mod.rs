use serde::{Deserialize, Serialize};

pub mod listing;
pub mod platform;

pub use listing::{GenerationResult, RunOutcome, RunSummary, SessionStats};
pub use platform::Platform;

/// Placeholder used for descriptive fields the form left blank
pub const NOT_SPECIFIED: &str = "Not specified";

/// Writing style requested for the generated copy
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum ListingStyle {
    #[default]
    Professional,
    Warm,
    Luxury,
    Modern,
    FamilyFriendly,
}

impl ListingStyle {
    pub const ALL: [ListingStyle; 5] = [
        ListingStyle::Professional,
        ListingStyle::Warm,
        ListingStyle::Luxury,
        ListingStyle::Modern,
        ListingStyle::FamilyFriendly,
    ];

    /// Parse a form value, falling back to `Professional` for anything unknown
    pub fn parse_or_default(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "warm" => Self::Warm,
            "luxury" => Self::Luxury,
            "modern" => Self::Modern,
            "family-friendly" => Self::FamilyFriendly,
            _ => Self::Professional,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Professional => "professional",
            Self::Warm => "warm",
            Self::Luxury => "luxury",
            Self::Modern => "modern",
            Self::FamilyFriendly => "family-friendly",
        }
    }
}

/// Snapshot of one property's listing-relevant attributes.
///
/// Every field is populated; blanks from the form are replaced by defaults
/// during normalization, so consumers never deal with missing values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PropertyRecord {
    pub address: String,
    pub price: u64,
    pub property_type: String,
    pub bedrooms: String,
    pub bathrooms: String,
    pub square_footage: String,
    pub lot_size: String,
    pub year_built: String,
    pub garage_spaces: String,
    pub neighborhood: String,
    pub features: Vec<String>,
    pub special_features: String,
    pub additional_notes: String,
    pub listing_style: ListingStyle,
}

impl Default for PropertyRecord {
    fn default() -> Self {
        Self {
            address: String::new(),
            price: 0,
            property_type: "Property".to_string(),
            bedrooms: NOT_SPECIFIED.to_string(),
            bathrooms: NOT_SPECIFIED.to_string(),
            square_footage: NOT_SPECIFIED.to_string(),
            lot_size: NOT_SPECIFIED.to_string(),
            year_built: NOT_SPECIFIED.to_string(),
            garage_spaces: NOT_SPECIFIED.to_string(),
            neighborhood: NOT_SPECIFIED.to_string(),
            features: Vec::new(),
            special_features: "None specified".to_string(),
            additional_notes: "None".to_string(),
            listing_style: ListingStyle::Professional,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_style_falls_back_to_professional() {
        assert_eq!(ListingStyle::parse_or_default("baroque"), ListingStyle::Professional);
        assert_eq!(ListingStyle::parse_or_default(""), ListingStyle::Professional);
    }

    #[test]
    fn style_round_trips_through_its_form_value() {
        for style in ListingStyle::ALL {
            assert_eq!(ListingStyle::parse_or_default(style.as_str()), style);
        }
    }

    #[test]
    fn style_serializes_kebab_case() {
        let json = serde_json::to_string(&ListingStyle::FamilyFriendly).unwrap();
        assert_eq!(json, "\"family-friendly\"");
    }
}
