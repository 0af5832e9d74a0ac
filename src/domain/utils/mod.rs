use crate::domain::options::NormalizationConfig;
use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

const PUNCTUATION_RE: &str = r#"[,.()"']"#;
const RESERVED_SEPARATOR_RE: &str = r"\|";

pub static REGEX_COLLECTION: Lazy<RegexCollection> = Lazy::new(|| {
    let punctuation_removal = Regex::new(PUNCTUATION_RE).expect("Invalid regex");
    let reserved_separators = Regex::new(RESERVED_SEPARATOR_RE).expect("Invalid regex");
    RegexCollection {
        punctuation_removal,
        reserved_separators,
    }
});

pub struct RegexCollection {
    pub punctuation_removal: Regex,
    pub reserved_separators: Regex,
}

/// Turns a display name into the key it is compared by.
///
/// Steps run in a fixed order: case folding, punctuation, accents, spaces.
/// The result is only ever compared, never shown.
#[must_use]
pub fn normalise(name: &str, config: &NormalizationConfig) -> String {
    let mut key = if config.case_sensitive {
        name.to_string()
    } else {
        name.to_lowercase()
    };

    if config.ignore_punctuation {
        key = REGEX_COLLECTION
            .punctuation_removal
            .replace_all(&key.replace('-', " "), "")
            .into_owned();
    }

    if config.ignore_accents {
        key = key.nfd().filter(|c| !is_combining_mark(*c)).collect();
    }

    if config.ignore_spaces {
        key.retain(|c| c != ' ');
    }

    key
}

/// Removes separator characters the catalog reserves for its own markup.
#[must_use]
pub fn sanitise(name: &str) -> String {
    REGEX_COLLECTION
        .reserved_separators
        .replace_all(name, "")
        .into_owned()
}

#[must_use]
pub fn capitalise(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
    }
}

#[must_use]
pub fn title_case(text: &str) -> String {
    text.split(' ').map(capitalise).collect::<Vec<_>>().join(" ")
}
