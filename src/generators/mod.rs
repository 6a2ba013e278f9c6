pub mod demo;
pub mod error;
pub mod gemini;
pub mod retry;
pub mod traits;
pub mod types;

pub use demo::demo_listing;
pub use error::GenerationError;
pub use gemini::GeminiGenerator;
pub use retry::{RetryPolicy, RetryingGenerator};
pub use traits::ListingGenerator;
pub use types::GeminiSettings;
