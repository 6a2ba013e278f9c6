use crate::generators::GenerationError;
use async_trait::async_trait;

/// Common trait for all listing copy generators
/// This allows swapping the Gemini backend for other providers or test doubles
#[async_trait]
pub trait ListingGenerator: Send + Sync {
    /// Turn a complete prompt into listing copy
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;

    /// Get the name of the generation backend
    fn provider_name(&self) -> &'static str;
}
