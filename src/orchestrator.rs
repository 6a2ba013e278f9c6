use crate::error::{RunError, SessionError};
use crate::generators::{demo_listing, GenerationError, ListingGenerator};
use crate::models::{GenerationResult, Platform, PropertyRecord, RunSummary};
use crate::normalizer::{normalize, validate_required, FormInput};
use crate::prompt::build_prompt;
use crate::session::{ActiveRun, ListingSession};
use futures::future::join_all;
use std::time::Instant;
use tracing::{info, warn};

/// Generated copy shorter than this is treated as a failed generation
pub const MIN_CONTENT_CHARS: usize = 50;

/// Drives prompt building and generation across all platforms
pub struct Orchestrator {
    generator: Box<dyn ListingGenerator>,
    platforms: Vec<Platform>,
}

impl Orchestrator {
    /// Create an orchestrator for the default platform set
    pub fn new(generator: Box<dyn ListingGenerator>) -> Self {
        Self::with_platforms(generator, Platform::defaults())
    }

    pub fn with_platforms(generator: Box<dyn ListingGenerator>, platforms: Vec<Platform>) -> Self {
        Self {
            generator,
            platforms,
        }
    }

    pub fn platforms(&self) -> &[Platform] {
        &self.platforms
    }

    /// Generate copy for one platform, substituting the demo listing on failure.
    ///
    /// Never fails: the error that triggered the fallback travels inside the
    /// returned result.
    pub async fn generate_one(
        &self,
        prompt: &str,
        platform: &Platform,
        record: &PropertyRecord,
    ) -> GenerationResult {
        info!("Generating {} listing...", platform.name);

        match self.request_copy(prompt).await {
            Ok(content) => {
                info!("✅ {} listing generated successfully", platform.name);
                GenerationResult::generated(&platform.name, content)
            }
            Err(error) => {
                warn!(
                    platform = %platform.name,
                    error = %error,
                    "Falling back to demo listing"
                );
                let demo = demo_listing(&platform.name, record);
                GenerationResult::fallback(&platform.name, demo, error)
            }
        }
    }

    /// Generate for every platform at once and wait for all of them.
    ///
    /// Returns exactly one result per platform, in the order given.
    pub async fn generate_all(
        &self,
        record: &PropertyRecord,
        platforms: &[Platform],
    ) -> Vec<GenerationResult> {
        let requests = platforms.iter().map(|platform| async move {
            let prompt = build_prompt(record, platform);
            self.generate_one(&prompt, platform, record).await
        });

        join_all(requests).await
    }

    /// Validate the raw form, then run for the record it normalizes to.
    ///
    /// An incomplete form is rejected before any request is issued.
    pub async fn run_form(
        &self,
        session: &mut ListingSession,
        form: &FormInput,
    ) -> Result<(PropertyRecord, RunSummary), RunError> {
        validate_required(form)?;
        let record = normalize(form);
        let summary = self.run(session, &record).await?;
        Ok((record, summary))
    }

    /// One complete run: clear the session, generate, record the results.
    ///
    /// If the returned future is dropped mid-run the session goes back to idle.
    pub async fn run(
        &self,
        session: &mut ListingSession,
        record: &PropertyRecord,
    ) -> Result<RunSummary, SessionError> {
        let mut active = ActiveRun::start(session)?;
        info!(
            "Starting listing generation for: {} ({} platforms via {})",
            record.address,
            self.platforms.len(),
            self.generator.provider_name()
        );

        let started = Instant::now();
        let results = self.generate_all(record, &self.platforms).await;
        let duration = started.elapsed();

        let summary = RunSummary::from_results(&results, duration);
        for result in results {
            active.append(result);
        }
        active.finish(duration);

        info!(
            successful = summary.generated,
            errors = summary.fallbacks,
            duration = %format!("{:.2}s", duration.as_secs_f64()),
            "Listing generation completed"
        );
        Ok(summary)
    }

    async fn request_copy(&self, prompt: &str) -> Result<String, GenerationError> {
        let content = self.generator.generate(prompt).await?;
        let content = content.trim();
        let length = content.chars().count();
        if length < MIN_CONTENT_CHARS {
            return Err(GenerationError::TooShort { length });
        }
        Ok(content.to_string())
    }
}
