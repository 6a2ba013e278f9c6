//! Errors reported before or around a generation run.
//!
//! Failures of the generation service itself never surface here; they are
//! absorbed per platform as [`crate::generators::GenerationError`].

use thiserror::Error;

/// Defects in user input, rejected before any network call
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("Please fill in the {label} field.")]
    MissingField { field: String, label: String },

    #[error("Please configure your Gemini API key first!")]
    MissingApiKey,

    #[error("Please enter a valid Gemini API key (should start with \"AIza\").")]
    InvalidApiKey,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("A generation run is already in progress")]
    RunInProgress,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ExportError {
    #[error("No listings to export. Generate some listings first!")]
    NoListings,
}

/// Why a run requested from raw form input did not start
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RunError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Session(#[from] SessionError),
}
