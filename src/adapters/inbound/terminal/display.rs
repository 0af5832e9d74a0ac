use crate::domain::character::CharacterRef;
use crate::domain::session::{format_elapsed, Progress};
use crate::ports::inbound::display::{DisplayError, GameDisplay};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Duration;

/// Prints game updates to stdout. The clock is only printed alongside
/// progress, a line based terminal can't redraw it in place.
#[derive(Debug, Default)]
pub struct TerminalDisplay {
    elapsed_seconds: AtomicU64,
    input_enabled: AtomicBool,
    language_locked: AtomicBool,
}

impl TerminalDisplay {
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        Duration::from_secs(self.elapsed_seconds.load(Ordering::Relaxed))
    }

    #[must_use]
    pub fn input_enabled(&self) -> bool {
        self.input_enabled.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn language_locked(&self) -> bool {
        self.language_locked.load(Ordering::Relaxed)
    }
}

impl GameDisplay for TerminalDisplay {
    fn add_guess(&self, character: &CharacterRef) -> Result<(), DisplayError> {
        println!("  \u{001b}[1;32m+\u{001b}[0m {}", character.name);
        Ok(())
    }

    fn clear_guesses(&self) -> Result<(), DisplayError> {
        println!("\u{001b}[1;35m--- New round ---\u{001b}[0m");
        Ok(())
    }

    fn clear_input(&self) -> Result<(), DisplayError> {
        Ok(())
    }

    fn set_input_enabled(&self, enabled: bool) -> Result<(), DisplayError> {
        self.input_enabled.store(enabled, Ordering::Relaxed);
        if enabled {
            println!("Go! Type pony names, one per line.");
        }
        Ok(())
    }

    fn set_language_locked(&self, locked: bool) -> Result<(), DisplayError> {
        self.language_locked.store(locked, Ordering::Relaxed);
        Ok(())
    }

    fn show_progress(&self, progress: Progress) -> Result<(), DisplayError> {
        println!("    {progress}  {}", format_elapsed(self.elapsed()));
        Ok(())
    }

    fn show_time(&self, elapsed: Duration) -> Result<(), DisplayError> {
        self.elapsed_seconds
            .store(elapsed.as_secs(), Ordering::Relaxed);
        Ok(())
    }
}
