use crate::config::parse_bool;
use once_cell::sync::Lazy;
use regex::Regex;
use std::str::FromStr;
use thiserror::Error;

static COMMAND_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^!(\w+)(?:\s+(.*?))?\s*$").expect("Invalid regex"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start,
    Stop,
    Language(String),
    Search(String),
    Pony(String),
    Option { name: String, enabled: bool },
    Options,
    Help,
    Quit,
    Guess(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("ParseError: {0}")]
pub struct ParseError(String);

impl ParseError {
    #[must_use]
    pub fn new(message: &str) -> Self {
        Self(message.to_string())
    }
}

impl FromStr for Command {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let Some(captures) = COMMAND_RE.captures(line.trim()) else {
            return Ok(Command::Guess(line.to_string()));
        };

        let name = captures.get(1).map_or("", |name| name.as_str());
        let argument = captures.get(2).map_or("", |argument| argument.as_str());

        match name.to_lowercase().as_str() {
            "start" => Ok(Command::Start),
            "stop" => Ok(Command::Stop),
            "help" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            "options" => Ok(Command::Options),
            "search" => Ok(Command::Search(argument.to_string())),
            "lang" | "language" => required(argument, "!lang needs a language code")
                .map(Command::Language),
            "pony" => required(argument, "!pony needs a character id").map(Command::Pony),
            "option" => parse_option(argument),
            other => Err(ParseError(format!("Unknown command '!{other}'"))),
        }
    }
}

fn required(argument: &str, message: &str) -> Result<String, ParseError> {
    if argument.is_empty() {
        Err(ParseError::new(message))
    } else {
        Ok(argument.to_string())
    }
}

fn parse_option(argument: &str) -> Result<Command, ParseError> {
    let mut parts = argument.split_whitespace();
    let (Some(name), Some(value), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(ParseError::new("Usage: !option <name> <on|off>"));
    };

    let enabled = parse_bool(value)
        .ok_or_else(|| ParseError(format!("'{value}' should be on or off")))?;

    Ok(Command::Option {
        name: name.to_string(),
        enabled,
    })
}
