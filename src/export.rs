use crate::error::ExportError;
use crate::models::{GenerationResult, PropertyRecord};
use crate::prompt::format_price;
use chrono::{DateTime, Local};
use std::fmt::Write;

/// Render every listing of the session as one plain-text document
pub fn export_listings(
    record: &PropertyRecord,
    listings: &[GenerationResult],
    generated_at: DateTime<Local>,
) -> Result<String, ExportError> {
    if listings.is_empty() {
        return Err(ExportError::NoListings);
    }

    let heavy_rule = "=".repeat(60);
    let light_rule = "=".repeat(40);
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(out, "LISTING SCOUT GENERATED LISTINGS");
    let _ = writeln!(out, "Generated: {}", generated_at.format("%Y-%m-%d %H:%M:%S"));
    let _ = writeln!(out, "Property: {}", record.address);
    let _ = writeln!(out, "Price: {}", format_price(record.price));
    let _ = writeln!(out, "{}\n", heavy_rule);

    for (index, listing) in listings.iter().enumerate() {
        let _ = write!(
            out,
            "{}. {} LISTING\n{}\n\n{}\n\n",
            index + 1,
            listing.platform.to_uppercase(),
            light_rule,
            listing.content
        );
    }

    let total_words: usize = listings.iter().map(GenerationResult::word_count).sum();
    let _ = writeln!(out, "{}", heavy_rule);
    let _ = writeln!(out, "Total listings: {}", listings.len());
    let _ = writeln!(out, "Total words: {}", total_words);
    let _ = write!(out, "Generated by Listing Scout - Real Estate Listing Generator");

    Ok(out)
}

/// File name for an export taken at `at`
pub fn export_file_name(at: DateTime<Local>) -> String {
    format!("listings-{}.txt", at.format("%Y-%m-%dT%H-%M-%S"))
}
