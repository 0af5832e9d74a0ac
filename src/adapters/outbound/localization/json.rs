use crate::domain::character::FALLBACK_LANGUAGE;
use crate::ports::outbound::localization::{Localization, LocalizationError};
use std::collections::HashMap;
use std::path::Path;

type Dictionary = HashMap<String, HashMap<String, String>>;

/// Localization dictionary shaped `{<key>: {<language>: <text>}}`.
#[derive(Debug, Clone, Default)]
pub struct JsonLocalization {
    dictionary: Dictionary,
}

impl JsonLocalization {
    #[must_use]
    pub fn from_dictionary(dictionary: Dictionary) -> Self {
        Self { dictionary }
    }

    pub async fn open(path: &Path) -> Result<Self, LocalizationError> {
        let text = tokio::fs::read_to_string(path).await?;
        let dictionary: Dictionary = serde_json::from_str(&text)?;
        log::info!("Loaded {} localization keys", dictionary.len());
        Ok(Self { dictionary })
    }
}

impl Localization for JsonLocalization {
    fn translate(&self, key: &str, language: &str) -> String {
        let Some(translations) = self.dictionary.get(key) else {
            return key.to_string();
        };

        [language, FALLBACK_LANGUAGE]
            .iter()
            .filter_map(|language| translations.get(*language))
            .find(|text| !text.is_empty())
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_localization() -> JsonLocalization {
        let mut ponyville = HashMap::new();
        ponyville.insert(String::from("english"), String::from("PONYVILLE"));
        ponyville.insert(String::from("french"), String::from("PONEYVILLE"));
        ponyville.insert(String::from("german"), String::new());

        let mut dictionary = HashMap::new();
        dictionary.insert(String::from("PONYVILLE"), ponyville);
        JsonLocalization::from_dictionary(dictionary)
    }

    #[test]
    fn test_translate_active_language() {
        assert_eq!(
            create_localization().translate("PONYVILLE", "french"),
            "PONEYVILLE"
        );
    }

    #[test]
    fn test_translate_falls_back_to_english() {
        let localization = create_localization();
        assert_eq!(localization.translate("PONYVILLE", "spanish"), "PONYVILLE");
        assert_eq!(localization.translate("PONYVILLE", "german"), "PONYVILLE");
    }

    #[test]
    fn test_translate_unknown_key() {
        assert_eq!(
            JsonLocalization::default().translate("CANTERLOT", "english"),
            "CANTERLOT"
        );
    }

    #[tokio::test]
    async fn test_open_dictionary() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"{"CANTERLOT": {"english": "CANTERLOT", "french": "CANTERLOT FR"}}"#)
            .unwrap();

        let localization = JsonLocalization::open(file.path()).await.unwrap();
        assert_eq!(localization.translate("CANTERLOT", "french"), "CANTERLOT FR");
    }

    #[tokio::test]
    async fn test_open_invalid_dictionary() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"[1, 2, 3]").unwrap();

        assert!(matches!(
            JsonLocalization::open(file.path()).await,
            Err(LocalizationError::Parse(_))
        ));
    }
}
