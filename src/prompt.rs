//! Builds the natural-language prompt for one property and platform.
//!
//! Prompt building is a pure function of its inputs: the same record and
//! platform always produce byte-identical output.

use crate::models::{ListingStyle, Platform, PropertyRecord, NOT_SPECIFIED};

/// Tone guidance for each writing style
pub fn style_guidance(style: ListingStyle) -> &'static str {
    match style {
        ListingStyle::Professional => "Write in a professional, authoritative tone that builds trust and credibility. Focus on facts, market appeal, and investment value.",
        ListingStyle::Warm => "Use warm, inviting language that makes readers feel at home and emotionally connected. Emphasize comfort and lifestyle.",
        ListingStyle::Luxury => "Employ sophisticated, elegant language that emphasizes exclusivity, premium quality, and luxury amenities.",
        ListingStyle::Modern => "Use contemporary, clean language that highlights innovation, cutting-edge features, and sleek design.",
        ListingStyle::FamilyFriendly => "Focus on family lifestyle benefits with warm, community-oriented language. Emphasize safety, schools, and family spaces.",
    }
}

/// Format a price with thousands separators, e.g. `$1,250,000`
pub fn format_price(price: u64) -> String {
    let digits = price.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("${}", grouped)
}

/// Append a unit to a measurement unless it is the "Not specified" placeholder
pub fn with_unit(value: &str, unit: &str) -> String {
    if value == NOT_SPECIFIED {
        value.to_string()
    } else {
        format!("{} {}", value, unit)
    }
}

/// `walk-in-closet` -> `Walk In Closet`
pub fn humanize_feature(tag: &str) -> String {
    tag.split('-')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn features_text(features: &[String]) -> String {
    if features.is_empty() {
        return "Standard home features".to_string();
    }
    features
        .iter()
        .map(|tag| tag.replace('-', " "))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Compose the full prompt for one platform
pub fn build_prompt(record: &PropertyRecord, platform: &Platform) -> String {
    format!(
        "You are an expert real estate copywriter specializing in {name}. Create a compelling, engaging listing that focuses on {focus}.

PROPERTY DETAILS:
- Address: {address}
- Price: {price}
- Type: {property_type}
- Bedrooms: {bedrooms}
- Bathrooms: {bathrooms}
- Square Footage: {square_footage}
- Lot Size: {lot_size}
- Year Built: {year_built}
- Garage: {garage}
- Neighborhood: {neighborhood}
- Key Features: {features}
- Special Features: {special_features}
- Additional Notes: {additional_notes}

WRITING STYLE: {style}

PLATFORM REQUIREMENTS FOR {name}:
{requirements}

INSTRUCTIONS:
1. Create a compelling headline that grabs attention
2. Write a detailed description (300-500 words) that highlights the property's best features
3. Use persuasive real estate language and emotional triggers
4. Include specific details that justify the price point
5. End with a strong call-to-action
6. Format with proper paragraphs and spacing

Generate the complete listing now:",
        name = platform.name,
        focus = platform.focus,
        address = record.address,
        price = format_price(record.price),
        property_type = record.property_type,
        bedrooms = record.bedrooms,
        bathrooms = record.bathrooms,
        square_footage = with_unit(&record.square_footage, "sq ft"),
        lot_size = with_unit(&record.lot_size, "sq ft"),
        year_built = record.year_built,
        garage = with_unit(&record.garage_spaces, "spaces"),
        neighborhood = record.neighborhood,
        features = features_text(&record.features),
        special_features = record.special_features,
        additional_notes = record.additional_notes,
        style = style_guidance(record.listing_style),
        requirements = platform.requirements(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn springfield() -> PropertyRecord {
        PropertyRecord {
            address: "1 Main St, Springfield, IL 62701".to_string(),
            price: 250_000,
            bedrooms: "3".to_string(),
            ..PropertyRecord::default()
        }
    }

    fn zillow() -> Platform {
        Platform::defaults().remove(0)
    }

    #[test]
    fn luxury_zillow_scenario() {
        let record = PropertyRecord {
            listing_style: ListingStyle::Luxury,
            ..springfield()
        };
        let prompt = build_prompt(&record, &zillow());

        assert!(prompt.contains("1 Main St, Springfield, IL 62701"));
        assert!(prompt.contains("$250,000"));
        assert!(prompt.contains(style_guidance(ListingStyle::Luxury)));
        assert!(prompt.contains(zillow().requirements()));
        assert!(prompt.contains("specializing in Zillow"));
        assert!(prompt.contains("- Bedrooms: 3"));
        assert!(prompt.contains("- Key Features: Standard home features"));
    }

    #[test]
    fn every_style_includes_all_supplied_values() {
        let record = PropertyRecord {
            property_type: "Townhouse".to_string(),
            bathrooms: "2.5".to_string(),
            square_footage: "1850".to_string(),
            lot_size: "4000".to_string(),
            year_built: "1998".to_string(),
            garage_spaces: "2".to_string(),
            neighborhood: "Old Town".to_string(),
            features: vec!["hardwood-floors".to_string(), "pool".to_string()],
            special_features: "Rooftop deck".to_string(),
            additional_notes: "Seller motivated".to_string(),
            ..springfield()
        };

        for style in ListingStyle::ALL {
            let record = PropertyRecord {
                listing_style: style,
                ..record.clone()
            };
            for platform in Platform::defaults() {
                let prompt = build_prompt(&record, &platform);
                for expected in [
                    "1 Main St, Springfield, IL 62701",
                    "$250,000",
                    "Townhouse",
                    "- Bathrooms: 2.5",
                    "- Square Footage: 1850 sq ft",
                    "- Lot Size: 4000 sq ft",
                    "- Year Built: 1998",
                    "- Garage: 2 spaces",
                    "- Neighborhood: Old Town",
                    "hardwood floors, pool",
                    "Rooftop deck",
                    "Seller motivated",
                    style_guidance(style),
                    platform.requirements(),
                ] {
                    assert!(prompt.contains(expected), "missing {expected:?} for {style:?}");
                }
            }
        }
    }

    #[test]
    fn unset_measurements_have_no_unit_suffix() {
        let prompt = build_prompt(&springfield(), &zillow());
        assert!(prompt.contains("- Square Footage: Not specified\n"));
        assert!(prompt.contains("- Garage: Not specified\n"));
    }

    #[test]
    fn unknown_style_value_uses_professional_guidance() {
        let record = PropertyRecord {
            listing_style: ListingStyle::parse_or_default("gothic"),
            ..springfield()
        };
        let prompt = build_prompt(&record, &zillow());
        assert!(prompt.contains(style_guidance(ListingStyle::Professional)));
    }

    #[test]
    fn unknown_platform_gets_balanced_requirements() {
        let prompt = build_prompt(&springfield(), &Platform::new("Trulia", "neighborhood data"));
        assert!(prompt.contains("PLATFORM REQUIREMENTS FOR Trulia:\nCreate a balanced listing"));
    }

    #[test]
    fn custom_platform_requirements_reach_the_prompt() {
        let platform = Platform::new("Craigslist", "brevity")
            .with_requirements("Keep it under 80 words and list the asking price first.");
        let prompt = build_prompt(&springfield(), &platform);
        assert!(prompt.contains(
            "PLATFORM REQUIREMENTS FOR Craigslist:\nKeep it under 80 words and list the asking price first."
        ));
        assert!(!prompt.contains("Create a balanced listing"));
    }

    #[test]
    fn building_twice_is_identical() {
        let record = springfield();
        let platform = zillow();
        assert_eq!(build_prompt(&record, &platform), build_prompt(&record, &platform));
    }

    #[test]
    fn price_grouping() {
        assert_eq!(format_price(0), "$0");
        assert_eq!(format_price(999), "$999");
        assert_eq!(format_price(1000), "$1,000");
        assert_eq!(format_price(1_250_000), "$1,250,000");
    }

    #[test]
    fn feature_humanizing() {
        assert_eq!(humanize_feature("walk-in-closet"), "Walk In Closet");
        assert_eq!(humanize_feature("pool"), "Pool");
    }
}
