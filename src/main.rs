use anyhow::Context;
use chrono::Local;
use listing_scout::export::{export_file_name, export_listings};
use listing_scout::generators::{GeminiGenerator, RetryingGenerator};
use listing_scout::{
    AppConfig, FormInput, ListingGenerator, ListingSession, Orchestrator, RunOutcome,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("🏡 Listing Scout - AI Real Estate Listing Generator");
    info!("===================================================");

    let form_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "demos/property.json".to_string());

    let config = AppConfig::from_env()?;
    info!(model = %config.gemini.model, "Configuration loaded");

    let raw = tokio::fs::read_to_string(&form_path)
        .await
        .with_context(|| format!("Failed to read property form {}", form_path))?;
    let value: serde_json::Value =
        serde_json::from_str(&raw).context("Property form is not valid JSON")?;
    let form = FormInput::from_json(&value)?;

    let gemini = GeminiGenerator::new(config.api_key.clone(), config.gemini.clone())?;
    let policy = config.retry_policy();
    let generator: Box<dyn ListingGenerator> = if policy.is_enabled() {
        info!("Retrying transient failures up to {} attempts", policy.max_attempts());
        Box::new(RetryingGenerator::new(Box::new(gemini), policy))
    } else {
        Box::new(gemini)
    };

    let orchestrator = Orchestrator::new(generator);
    let mut session = ListingSession::new();
    let (record, summary) = orchestrator.run_form(&mut session, &form).await?;

    // Display results
    for (i, listing) in session.listings().iter().enumerate() {
        println!("{}. {} Listing", i + 1, listing.platform);
        if let Some(detail) = listing.error_detail() {
            println!("   (demo version: {})", detail);
        }
        println!();
        println!("{}", listing.content);
        println!();
    }

    let stats = session.stats();
    println!(
        "Listings: {}  Words: {}  Time: {}",
        stats.listing_count,
        stats.total_words,
        stats.duration_label()
    );

    for error in &summary.errors {
        warn!("{}", error);
    }
    if summary.outcome == RunOutcome::FullyDegraded {
        warn!("{}", summary.status_message());
    } else {
        info!("{}", summary.status_message());
    }

    let json = serde_json::to_string_pretty(session.listings())?;
    tokio::fs::write("generated_listings.json", json).await?;
    info!("💾 Saved listings to generated_listings.json");

    let now = Local::now();
    let export = export_listings(&record, session.listings(), now)?;
    let file_name = export_file_name(now);
    tokio::fs::write(&file_name, export).await?;
    info!("📥 Exported all listings to {}", file_name);

    Ok(())
}
