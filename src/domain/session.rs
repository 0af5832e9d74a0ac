use crate::domain::character::{CharacterId, CharacterRef};
use crate::domain::name_index::NameIndex;
use crate::ports::inbound::display::{DisplayError, GameDisplay};
use indexmap::IndexSet;
use std::fmt::{Display, Formatter};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant};

const TICK: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Running,
    Stopped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub guessed: usize,
    pub total: usize,
}

impl Display for Progress {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.guessed, self.total)
    }
}

/// `m:ss`, minutes are not wrapped into hours.
#[must_use]
pub fn format_elapsed(elapsed: Duration) -> String {
    let seconds = elapsed.as_secs();
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// One round of the recall game.
///
/// `start` must be called from inside a tokio runtime: the timer runs as a
/// spawned task until the round stops.
pub struct GameSession<D> {
    display: Arc<D>,
    index: Arc<NameIndex>,
    state: SessionState,
    guessed: IndexSet<CharacterId>,
    started_at: Option<Instant>,
    stopped_at: Option<Instant>,
    ticker: Option<JoinHandle<()>>,
}

impl<D> GameSession<D>
where
    D: GameDisplay + Send + Sync + 'static,
{
    pub fn new(display: Arc<D>, index: Arc<NameIndex>) -> Self {
        Self {
            display,
            index,
            state: SessionState::Idle,
            guessed: IndexSet::new(),
            started_at: None,
            stopped_at: None,
            ticker: None,
        }
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Language may not change while a round is running.
    #[must_use]
    pub fn language_locked(&self) -> bool {
        self.state == SessionState::Running
    }

    #[must_use]
    pub fn progress(&self) -> Progress {
        Progress {
            guessed: self.guessed.len(),
            total: self.index.total_count(),
        }
    }

    #[must_use]
    pub fn guessed(&self) -> Vec<&CharacterId> {
        self.guessed.iter().collect()
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        match (self.started_at, self.stopped_at) {
            (Some(started_at), Some(stopped_at)) => stopped_at.duration_since(started_at),
            (Some(started_at), None) => started_at.elapsed(),
            _ => Duration::ZERO,
        }
    }

    #[must_use]
    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed().as_secs()
    }

    /// Starts a fresh round against `index`, stopping the current one first.
    pub fn start(&mut self, index: Arc<NameIndex>) {
        if self.state == SessionState::Running {
            self.stop();
        }

        self.index = index;
        self.guessed.clear();
        self.state = SessionState::Running;

        let started_at = Instant::now();
        self.started_at = Some(started_at);
        self.stopped_at = None;

        render(self.display.clear_guesses(), "clear guesses");
        render(self.display.clear_input(), "clear input");
        render(self.display.set_language_locked(true), "lock language");
        render(self.display.show_time(Duration::ZERO), "show time");
        render(self.display.show_progress(self.progress()), "show progress");
        render(self.display.set_input_enabled(true), "enable input");

        let display = Arc::clone(&self.display);
        self.ticker = Some(tokio::spawn(async move {
            let mut interval = time::interval_at(started_at + TICK, TICK);
            loop {
                interval.tick().await;
                render(display.show_time(started_at.elapsed()), "show time");
            }
        }));

        log::info!(
            "Round started in {} with {} characters",
            self.index.language(),
            self.index.total_count()
        );
    }

    /// Ends the round. Guesses stay visible until the next start.
    pub fn stop(&mut self) {
        if self.state != SessionState::Running {
            return;
        }

        if let Some(ticker) = self.ticker.take() {
            ticker.abort();
        }
        self.stopped_at = Some(Instant::now());
        self.state = SessionState::Stopped;

        render(self.display.set_input_enabled(false), "disable input");
        render(self.display.set_language_locked(false), "unlock language");

        log::info!(
            "Round stopped at {} after {}",
            self.progress(),
            format_elapsed(self.elapsed())
        );
    }

    /// Checks the current input. A new match is recorded and returned,
    /// anything else is silently ignored.
    pub fn submit(&mut self, input: &str) -> Option<CharacterRef> {
        if self.state != SessionState::Running {
            return None;
        }

        let input = input.replace('\n', "");
        let character = self.index.match_exact(&input)?;
        if !self.guessed.insert(character.id.clone()) {
            return None;
        }

        render(self.display.add_guess(&character), "add guess");
        render(self.display.clear_input(), "clear input");
        render(self.display.show_progress(self.progress()), "show progress");

        Some(character)
    }
}

impl<D> Drop for GameSession<D> {
    fn drop(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.abort();
        }
    }
}

fn render(result: Result<(), DisplayError>, action: &str) {
    if let Err(why) = result {
        log::warn!("Couldn't {action}: {why}");
    }
}
