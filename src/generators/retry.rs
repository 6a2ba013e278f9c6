//! Opt-in retry wrapper for listing generators.

use crate::generators::traits::ListingGenerator;
use crate::generators::GenerationError;
use async_trait::async_trait;
use std::time::Duration;
use tracing::warn;

const DEFAULT_MAX_DELAY: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: u32,
    base_delay: Duration,
    max_delay: Duration,
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, base_delay: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            base_delay,
            max_delay: DEFAULT_MAX_DELAY.max(base_delay),
        }
    }

    pub fn with_max_delay(mut self, max_delay: Duration) -> Self {
        self.max_delay = max_delay;
        self
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// A single attempt means retrying is switched off
    pub fn is_enabled(&self) -> bool {
        self.max_attempts > 1
    }

    fn delay_for_retry(&self, failed_attempt: u32) -> Duration {
        // attempt=1 -> base, attempt=2 -> base*2, attempt=3 -> base*4, capped.
        let exponent = failed_attempt.saturating_sub(1).min(6);
        self.base_delay
            .saturating_mul(1 << exponent)
            .min(self.max_delay)
    }
}

pub struct RetryingGenerator {
    inner: Box<dyn ListingGenerator>,
    policy: RetryPolicy,
}

impl RetryingGenerator {
    pub fn new(inner: Box<dyn ListingGenerator>, policy: RetryPolicy) -> Self {
        Self { inner, policy }
    }
}

#[async_trait]
impl ListingGenerator for RetryingGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let mut attempt = 1;
        loop {
            match self.inner.generate(prompt).await {
                Ok(text) => return Ok(text),
                Err(error) if error.is_transient() && attempt < self.policy.max_attempts => {
                    let delay = self.policy.delay_for_retry(attempt);
                    warn!(
                        "{} generation failed (attempt {}/{}): {}. Retrying in {} ms.",
                        self.inner.provider_name(),
                        attempt,
                        self.policy.max_attempts,
                        error,
                        delay.as_millis()
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(error) => return Err(error),
            }
        }
    }

    fn provider_name(&self) -> &'static str {
        self.inner.provider_name()
    }
}
