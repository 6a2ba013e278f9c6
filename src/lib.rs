//! Listing Scout: turns a property form into platform-tailored listing copy.
//!
//! A run normalizes the form into a [`PropertyRecord`], builds one prompt per
//! [`Platform`], asks the configured [`ListingGenerator`] for copy on all
//! platforms at once, and substitutes a demo listing wherever generation
//! fails. Results accumulate in a [`ListingSession`].

pub mod config;
pub mod error;
pub mod export;
pub mod generators;
pub mod models;
pub mod normalizer;
pub mod orchestrator;
pub mod prompt;
pub mod session;

pub use config::AppConfig;
pub use error::{ExportError, InputError, RunError, SessionError};
pub use generators::{GenerationError, ListingGenerator};
pub use models::{
    GenerationResult, ListingStyle, Platform, PropertyRecord, RunOutcome, RunSummary,
    SessionStats,
};
pub use normalizer::FormInput;
pub use orchestrator::Orchestrator;
pub use session::ListingSession;
