use crate::error::SessionError;
use crate::models::{GenerationResult, SessionStats};
use std::time::Duration;
use tracing::debug;

/// Listings produced in the current session, in platform dispatch order.
///
/// This is the only mutable state of the generator. It is passed explicitly
/// to each run instead of living in a global.
#[derive(Debug, Default)]
pub struct ListingSession {
    listings: Vec<GenerationResult>,
    last_duration: Option<Duration>,
    generating: bool,
}

impl ListingSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, result: GenerationResult) {
        debug!(platform = %result.platform, fallback = result.is_fallback(), "Listing appended");
        self.listings.push(result);
    }

    /// Drop every listing and leave the session idle, e.g. when the form is cleared
    pub fn reset(&mut self) {
        self.listings.clear();
        self.last_duration = None;
        self.generating = false;
    }

    pub fn listings(&self) -> &[GenerationResult] {
        &self.listings
    }

    pub fn is_generating(&self) -> bool {
        self.generating
    }

    pub fn stats(&self) -> SessionStats {
        SessionStats {
            listing_count: self.listings.len(),
            total_words: self.listings.iter().map(GenerationResult::word_count).sum(),
            generation_duration: self.last_duration,
        }
    }

    /// Mark a run as started; results of the previous run are discarded
    pub fn begin_run(&mut self) -> Result<(), SessionError> {
        if self.generating {
            return Err(SessionError::RunInProgress);
        }
        self.reset();
        self.generating = true;
        Ok(())
    }

    pub fn finish_run(&mut self, duration: Duration) {
        self.generating = false;
        self.last_duration = Some(duration);
    }

    /// Return to idle without recording a duration, for runs that never finished
    pub fn abandon_run(&mut self) {
        if self.generating {
            debug!("Generation run abandoned before completion");
        }
        self.generating = false;
    }
}

/// Marks a session busy for as long as it is held.
///
/// Dropping the guard, including when the run future is cancelled, puts the
/// session back to idle.
pub struct ActiveRun<'a> {
    session: &'a mut ListingSession,
}

impl<'a> ActiveRun<'a> {
    pub fn start(session: &'a mut ListingSession) -> Result<Self, SessionError> {
        session.begin_run()?;
        Ok(Self { session })
    }

    pub fn append(&mut self, result: GenerationResult) {
        self.session.append(result);
    }

    pub fn finish(self, duration: Duration) {
        self.session.finish_run(duration);
    }
}

impl Drop for ActiveRun<'_> {
    fn drop(&mut self) {
        self.session.abandon_run();
    }
}
