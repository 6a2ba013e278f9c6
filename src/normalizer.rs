use crate::error::InputError;
use crate::models::{ListingStyle, PropertyRecord};
use anyhow::{bail, Context, Result};
use serde_json::Value;
use std::collections::HashMap;
use tracing::debug;

/// Form fields that must be filled before a run may start
pub const REQUIRED_FIELDS: [&str; 6] = [
    "address",
    "city",
    "state",
    "zipCode",
    "price",
    "propertyType",
];

/// Raw form state: field name to entered value, plus the checked feature tags
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormInput {
    pub fields: HashMap<String, String>,
    pub features: Vec<String>,
}

impl FormInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    pub fn with_feature(mut self, tag: impl Into<String>) -> Self {
        self.features.push(tag.into());
        self
    }

    /// Decode a JSON object of scalar field values and a `features` array
    pub fn from_json(value: &Value) -> Result<Self> {
        let object = value
            .as_object()
            .context("Property form must be a JSON object")?;

        let mut form = Self::new();
        for (name, value) in object {
            if name == "features" {
                let tags = value
                    .as_array()
                    .context("`features` must be an array of strings")?;
                for tag in tags {
                    let tag = tag
                        .as_str()
                        .with_context(|| format!("Feature tag {} is not a string", tag))?;
                    form.features.push(tag.to_string());
                }
                continue;
            }

            let text = match value {
                Value::Null => continue,
                Value::String(s) => s.clone(),
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                _ => bail!("Field `{}` must be a scalar value", name),
            };
            form.fields.insert(name.clone(), text);
        }

        Ok(form)
    }

    /// Trimmed value of a field, `None` when absent or blank
    pub fn value(&self, name: &str) -> Option<&str> {
        self.fields
            .get(name)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    fn value_or(&self, name: &str, default: &str) -> String {
        self.value(name).unwrap_or(default).to_string()
    }
}

/// Reject forms with an empty required field
pub fn validate_required(form: &FormInput) -> Result<(), InputError> {
    for field in REQUIRED_FIELDS {
        if form.value(field).is_none() {
            return Err(InputError::MissingField {
                field: field.to_string(),
                label: humanize_field_name(field),
            });
        }
    }
    Ok(())
}

/// Build a fully populated record from the current form state
pub fn normalize(form: &FormInput) -> PropertyRecord {
    let defaults = PropertyRecord::default();

    let address = format!(
        "{}, {}, {} {}",
        form.value("address").unwrap_or_default(),
        form.value("city").unwrap_or_default(),
        form.value("state").unwrap_or_default(),
        form.value("zipCode").unwrap_or_default(),
    );

    let mut features: Vec<String> = Vec::new();
    for tag in form.features.iter().map(|t| t.trim()).filter(|t| !t.is_empty()) {
        if !features.iter().any(|seen| seen == tag) {
            features.push(tag.to_string());
        }
    }

    let record = PropertyRecord {
        address,
        price: parse_price(form.value("price").unwrap_or("0")),
        property_type: form.value_or("propertyType", &defaults.property_type),
        bedrooms: form.value_or("bedrooms", &defaults.bedrooms),
        bathrooms: form.value_or("bathrooms", &defaults.bathrooms),
        square_footage: form.value_or("squareFootage", &defaults.square_footage),
        lot_size: form.value_or("lotSize", &defaults.lot_size),
        year_built: form.value_or("yearBuilt", &defaults.year_built),
        garage_spaces: form.value_or("garage", &defaults.garage_spaces),
        neighborhood: form.value_or("neighborhood", &defaults.neighborhood),
        features,
        special_features: form.value_or("specialFeatures", &defaults.special_features),
        additional_notes: form.value_or("additionalNotes", &defaults.additional_notes),
        listing_style: form
            .value("listingStyle")
            .map(ListingStyle::parse_or_default)
            .unwrap_or_default(),
    };

    debug!(address = %record.address, price = record.price, "Normalized property record");
    record
}

/// Lenient price parsing: `$`, commas and fractions are tolerated, anything
/// negative or unparseable becomes 0
fn parse_price(raw: &str) -> u64 {
    let cleaned: String = raw
        .chars()
        .filter(|c| !matches!(c, '$' | ',') && !c.is_whitespace())
        .collect();

    match cleaned.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => value.trunc() as u64,
        _ => 0,
    }
}

/// `zipCode` -> `zip code`
fn humanize_field_name(field: &str) -> String {
    let mut label = String::with_capacity(field.len() + 2);
    for ch in field.chars() {
        if ch.is_uppercase() {
            label.push(' ');
        }
        label.extend(ch.to_lowercase());
    }
    label
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NOT_SPECIFIED;
    use serde_json::json;

    fn complete_form() -> FormInput {
        FormInput::new()
            .with_field("address", "1 Main St")
            .with_field("city", "Springfield")
            .with_field("state", "IL")
            .with_field("zipCode", "62701")
            .with_field("price", "250000")
            .with_field("propertyType", "Single Family Home")
    }

    #[test]
    fn composes_address() {
        let record = normalize(&complete_form());
        assert_eq!(record.address, "1 Main St, Springfield, IL 62701");
        assert_eq!(record.price, 250_000);
        assert_eq!(record.property_type, "Single Family Home");
    }

    #[test]
    fn blank_fields_get_defaults() {
        let record = normalize(&complete_form().with_field("bedrooms", "   "));
        assert_eq!(record.bedrooms, NOT_SPECIFIED);
        assert_eq!(record.neighborhood, NOT_SPECIFIED);
        assert_eq!(record.special_features, "None specified");
        assert_eq!(record.additional_notes, "None");
        assert_eq!(record.listing_style, ListingStyle::Professional);
    }

    #[test]
    fn price_degrades_to_zero() {
        assert_eq!(parse_price("$1,250,000"), 1_250_000);
        assert_eq!(parse_price("199999.99"), 199_999);
        assert_eq!(parse_price("-5"), 0);
        assert_eq!(parse_price("call for price"), 0);
        assert_eq!(parse_price(""), 0);
    }

    #[test]
    fn style_is_parsed_leniently() {
        let record = normalize(&complete_form().with_field("listingStyle", "family-friendly"));
        assert_eq!(record.listing_style, ListingStyle::FamilyFriendly);

        let record = normalize(&complete_form().with_field("listingStyle", "rustic"));
        assert_eq!(record.listing_style, ListingStyle::Professional);
    }

    #[test]
    fn features_kept_verbatim_without_duplicates() {
        let form = complete_form()
            .with_feature("hardwood-floors")
            .with_feature("pool")
            .with_feature("hardwood-floors")
            .with_feature(" ");
        let record = normalize(&form);
        assert_eq!(record.features, vec!["hardwood-floors", "pool"]);
    }

    #[test]
    fn missing_required_field_is_reported_with_label() {
        let mut form = complete_form();
        form.fields.remove("zipCode");

        let err = validate_required(&form).unwrap_err();
        assert_eq!(
            err,
            InputError::MissingField {
                field: "zipCode".to_string(),
                label: "zip code".to_string(),
            }
        );
        assert_eq!(err.to_string(), "Please fill in the zip code field.");
        assert!(validate_required(&complete_form()).is_ok());
    }

    #[test]
    fn decodes_json_form() {
        let value = json!({
            "address": "1 Main St",
            "price": 250000,
            "garage": null,
            "features": ["pool", "fireplace"]
        });
        let form = FormInput::from_json(&value).unwrap();
        assert_eq!(form.value("price"), Some("250000"));
        assert_eq!(form.value("garage"), None);
        assert_eq!(form.features, vec!["pool", "fireplace"]);
    }

    #[test]
    fn rejects_nested_json_values() {
        let value = json!({ "address": { "street": "1 Main St" } });
        assert!(FormInput::from_json(&value).is_err());
        assert!(FormInput::from_json(&json!(["not", "an", "object"])).is_err());
    }
}
