use crate::models::{PropertyRecord, NOT_SPECIFIED};
use crate::prompt::{format_price, humanize_feature, with_unit};

/// Banner that marks content as locally generated placeholder copy
pub const DEMO_MARKER: &str = "DEMO LISTING";

/// Deterministic placeholder listing used when generation fails
pub fn demo_listing(platform_name: &str, record: &PropertyRecord) -> String {
    let features = if record.features.is_empty() {
        "• Standard home features".to_string()
    } else {
        record
            .features
            .iter()
            .map(|tag| format!("• {}", humanize_feature(tag)))
            .collect::<Vec<_>>()
            .join("\n")
    };

    let neighborhood = if record.neighborhood == NOT_SPECIFIED {
        "neighborhood"
    } else {
        record.neighborhood.as_str()
    };

    format!(
        "🏡 **STUNNING {type_upper} IN PRIME LOCATION** 🏡

✨ **{marker} - Please Configure API Key for AI Generation** ✨

Welcome to this beautiful {property_type} located at {address}. This exceptional property offers {bedrooms} bedrooms and {bathrooms} bathrooms across {square_footage} of thoughtfully designed living space.

💰 **COMPETITIVELY PRICED AT {price}**

🔑 **Outstanding Features:**
{features}

📍 **PRIME LOCATION**
Situated in the desirable {neighborhood}, this property offers convenient access to schools, shopping, dining, and transportation.

🏠 **PROPERTY HIGHLIGHTS:**
• Year Built: {year_built}
• Lot Size: {lot_size}
• Garage: {garage}
• Special Features: {special_features}

⚠️ **DEMO MODE NOTICE**
This is a sample listing generated in demo mode. To create personalized, AI-powered listings tailored specifically for {platform}, please configure your Gemini API key.

📞 **READY TO MAKE THIS HOME YOURS?**
Contact us today to schedule a private showing and experience all this exceptional property has to offer!

---
Generated by Listing Scout - Real Estate Listing Generator",
        type_upper = record.property_type.to_uppercase(),
        marker = DEMO_MARKER,
        property_type = record.property_type,
        address = record.address,
        bedrooms = record.bedrooms,
        bathrooms = record.bathrooms,
        square_footage = with_unit(&record.square_footage, "square feet"),
        price = format_price(record.price),
        features = features,
        neighborhood = neighborhood,
        year_built = record.year_built,
        lot_size = with_unit(&record.lot_size, "sq ft"),
        garage = with_unit(&record.garage_spaces, "spaces"),
        special_features = record.special_features,
        platform = platform_name,
    )
}
