use thiserror::Error;

#[cfg(test)]
use mockall::automock;

#[derive(Error, Debug)]
pub enum LocalizationError {
    #[error("Couldn't read localization file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Couldn't parse localization file: {0}")]
    Parse(#[from] serde_json::Error),
}

#[cfg_attr(test, automock)]
pub trait Localization {
    /// Text for `key` in `language`. Unknown keys come back unchanged.
    fn translate(&self, key: &str, language: &str) -> String;
}
