use crate::domain::character::Character;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

pub const UNUSED_TAG: &str = "unused";

/// Toggles deciding which raw names count as the same guess.
///
/// Every field is always set. Changing any of them means the name index has
/// to be rebuilt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct NormalizationConfig {
    pub ignore_spaces: bool,
    pub case_sensitive: bool,
    pub ignore_accents: bool,
    pub ignore_punctuation: bool,
}

impl Default for NormalizationConfig {
    fn default() -> Self {
        Self {
            ignore_spaces: true,
            case_sensitive: false,
            ignore_accents: true,
            ignore_punctuation: true,
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("Unknown option '{0}'")]
pub struct UnknownOption(String);

/// Everything the options form can change. Defaults are resolved here, once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct GameOptions {
    pub normalization: NormalizationConfig,
    pub include_unused: bool,
}

impl GameOptions {
    pub const NAMES: [&'static str; 5] = [
        "ignore_spaces",
        "case_sensitive",
        "ignore_accents",
        "ignore_punctuation",
        "include_unused",
    ];

    pub fn set(&mut self, option: &str, enabled: bool) -> Result<(), UnknownOption> {
        match option {
            "ignore_spaces" => self.normalization.ignore_spaces = enabled,
            "case_sensitive" => self.normalization.case_sensitive = enabled,
            "ignore_accents" => self.normalization.ignore_accents = enabled,
            "ignore_punctuation" => self.normalization.ignore_punctuation = enabled,
            "include_unused" => self.include_unused = enabled,
            _ => return Err(UnknownOption(option.to_string())),
        }

        Ok(())
    }

    #[must_use]
    pub fn get(&self, option: &str) -> Option<bool> {
        match option {
            "ignore_spaces" => Some(self.normalization.ignore_spaces),
            "case_sensitive" => Some(self.normalization.case_sensitive),
            "ignore_accents" => Some(self.normalization.ignore_accents),
            "ignore_punctuation" => Some(self.normalization.ignore_punctuation),
            "include_unused" => Some(self.include_unused),
            _ => None,
        }
    }

    #[must_use]
    pub fn inclusion_filter(&self) -> InclusionFilter {
        InclusionFilter::new(self.include_unused)
    }
}

/// Tag based rule deciding whether a character takes part in an index build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InclusionFilter {
    tags: HashSet<String>,
}

impl InclusionFilter {
    #[must_use]
    pub fn new(include_unused: bool) -> Self {
        let mut tags = HashSet::new();
        if include_unused {
            tags.insert(UNUSED_TAG.to_string());
        }

        Self { tags }
    }

    /// Untagged characters are always admitted, tagged ones need at least one
    /// tag from the inclusion set.
    #[must_use]
    pub fn admits(&self, character: &Character) -> bool {
        character.tags.is_empty() || character.tags.iter().any(|tag| self.tags.contains(tag))
    }
}
