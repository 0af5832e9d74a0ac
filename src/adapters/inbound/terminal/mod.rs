pub mod command;
pub mod display;
pub mod help;

use crate::adapters::inbound::terminal::command::Command;
use crate::adapters::inbound::terminal::display::TerminalDisplay;
use crate::adapters::inbound::terminal::help::HELP;
use crate::domain::app::App;
use crate::domain::options::GameOptions;
use crate::domain::session::{format_elapsed, GameSession, SessionState};
use crate::ports::inbound::client::Client;
use crate::ports::outbound::localization::Localization;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};

pub struct Terminal<L> {
    app: App<L>,
    session: GameSession<TerminalDisplay>,
}

impl<L> Terminal<L>
where
    L: Localization + Send + Sync + 'static,
{
    pub fn new(app: App<L>) -> Self {
        let session = GameSession::new(Arc::new(TerminalDisplay::default()), app.index());
        Self { app, session }
    }

    /// Runs one line of input. Returns false once the user wants to leave.
    pub fn handle(&mut self, line: &str) -> bool {
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(why) => {
                println!("{why}");
                return true;
            }
        };

        match command {
            Command::Start => self.session.start(self.app.index()),
            Command::Stop => self.stop(),
            Command::Language(language) => self.switch_language(language),
            Command::Search(query) => self.search(&query),
            Command::Pony(id) => self.show_profile(&id),
            Command::Option { name, enabled } => self.set_option(&name, enabled),
            Command::Options => self.list_options(),
            Command::Help => println!("{HELP}"),
            Command::Quit => return false,
            Command::Guess(guess) => {
                if self.session.state() == SessionState::Running {
                    self.session.submit(&guess);
                } else {
                    println!("Start a round with !start first");
                }
            }
        }

        true
    }

    fn stop(&mut self) {
        if self.session.state() != SessionState::Running {
            println!("No round is running");
            return;
        }

        self.session.stop();
        println!(
            "Stopped: {} in {}",
            self.session.progress(),
            format_elapsed(self.session.elapsed())
        );
    }

    fn switch_language(&mut self, language: String) {
        if self.session.language_locked() {
            println!("Stop the round before switching language");
            return;
        }

        self.app.set_language(language);
        println!(
            "Language is now {} ({} ponies)",
            self.app.language(),
            self.app.index().total_count()
        );
    }

    fn set_option(&mut self, name: &str, enabled: bool) {
        if self.session.language_locked() {
            println!("Stop the round before changing options");
            return;
        }

        let mut options = *self.app.options();
        if let Err(why) = options.set(name, enabled) {
            println!("{why}");
            return;
        }

        self.app.set_options(options);
        self.list_options();
    }

    fn list_options(&self) {
        let options = self.app.options();
        for name in GameOptions::NAMES {
            let state = match options.get(name) {
                Some(true) => "on",
                Some(false) => "off",
                None => continue,
            };
            println!("  {name}: {state}");
        }
    }

    fn search(&self, query: &str) {
        let results = self.app.search(query);
        if results.is_empty() {
            println!("No ponies found");
            return;
        }

        for id in results {
            if let Some(character) = self.app.character(&id) {
                println!("  {:<40} {}", character.id, character.name);
            }
        }
    }

    fn show_profile(&self, id: &str) {
        let Some(profile) = self.app.profile(id) else {
            println!("No pony with id '{id}'");
            return;
        };

        println!("\u{001b}[1;4;35m{}\u{001b}[0m", profile.name);
        if let Some(description) = &profile.description {
            println!("{description}");
        }
        println!("  Town: {}", profile.location.as_deref().unwrap_or("-"));
        println!("  Level: {}", profile.unlock_level);
        println!("  Arrival bonus: {}", profile.arrival_bonus);
        println!("  House: {}", profile.house.as_deref().unwrap_or("-"));
        println!("  Minigame cooldown: {}", profile.minigame_cooldown);
        println!("  Minigame skip cost: {}", profile.minigame_skip_cost);
        println!("  Image: {}", profile.images.full);
    }
}

#[async_trait]
impl<L> Client for Terminal<L>
where
    L: Localization + Send + Sync + 'static,
{
    async fn run(&mut self) {
        println!("{HELP}");

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            match lines.next_line().await {
                Ok(Some(line)) => {
                    if !self.handle(&line) {
                        break;
                    }
                }
                Ok(None) => break,
                Err(why) => {
                    log::warn!("Couldn't read from stdin: {why}");
                    break;
                }
            }
        }

        self.session.stop();
        log::info!("Bye!");
    }
}
