use crate::domain::character::FALLBACK_LANGUAGE;
use crate::domain::options::GameOptions;
use std::env;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} wasn't in env vars")]
    Missing(&'static str),
    #[error("{name} should be true or false, got '{value}'")]
    InvalidBool { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub catalog_path: PathBuf,
    pub localization_path: Option<PathBuf>,
    pub language: String,
    pub options: GameOptions,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Result<Self, ConfigError> {
        let catalog_path = lookup("CATALOG_PATH")
            .map(PathBuf::from)
            .ok_or(ConfigError::Missing("CATALOG_PATH"))?;
        let localization_path = lookup("LOCALIZATION_PATH").map(PathBuf::from);
        let language = lookup("LANGUAGE").unwrap_or_else(|| FALLBACK_LANGUAGE.to_string());

        let mut options = GameOptions::default();
        let flags: [(&'static str, &str); 5] = [
            ("IGNORE_SPACES", "ignore_spaces"),
            ("CASE_SENSITIVE", "case_sensitive"),
            ("IGNORE_ACCENTS", "ignore_accents"),
            ("IGNORE_PUNCTUATION", "ignore_punctuation"),
            ("INCLUDE_UNUSED", "include_unused"),
        ];
        for (var, option) in flags {
            if let Some(value) = lookup(var) {
                let enabled = parse_bool(&value).ok_or_else(|| ConfigError::InvalidBool {
                    name: var,
                    value: value.clone(),
                })?;
                if options.set(option, enabled).is_err() {
                    log::warn!("{var} doesn't map to an option");
                }
            }
        }

        Ok(Self {
            catalog_path,
            localization_path,
            language,
            options,
        })
    }
}

#[must_use]
pub fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
