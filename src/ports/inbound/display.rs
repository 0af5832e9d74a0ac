use crate::domain::character::CharacterRef;
use crate::domain::session::Progress;
use std::time::Duration;
use thiserror::Error;

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, derive(Clone))]
#[derive(Debug, Error)]
#[error("Rendering failed: {0}")]
pub struct DisplayError(String);

impl DisplayError {
    #[must_use]
    pub fn new(msg: String) -> Self {
        Self(msg)
    }
}

/// Everything a running game pushes to whoever is showing it.
#[cfg_attr(test, automock)]
pub trait GameDisplay {
    fn add_guess(&self, character: &CharacterRef) -> Result<(), DisplayError>;
    fn clear_guesses(&self) -> Result<(), DisplayError>;
    fn clear_input(&self) -> Result<(), DisplayError>;
    fn set_input_enabled(&self, enabled: bool) -> Result<(), DisplayError>;
    fn set_language_locked(&self, locked: bool) -> Result<(), DisplayError>;
    fn show_progress(&self, progress: Progress) -> Result<(), DisplayError>;
    fn show_time(&self, elapsed: Duration) -> Result<(), DisplayError>;
}
