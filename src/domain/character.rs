use crate::domain::utils::sanitise;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub type CharacterId = String;

/// Language every catalog entry is expected to carry.
pub const FALLBACK_LANGUAGE: &str = "english";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ImageRefs {
    pub portrait: String,
    pub full: String,
}

impl ImageRefs {
    #[must_use]
    pub fn for_id(id: &str) -> Self {
        Self {
            portrait: format!("/assets/images/ponies/portrait/{id}.png"),
            full: format!("/assets/images/ponies/shop/{id}.png"),
        }
    }
}

/// One catalog entry. Read-only once the catalog has been loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Character {
    pub id: CharacterId,
    pub names: IndexMap<String, String>,
    pub alternate_names: IndexMap<String, Vec<String>>,
    pub tags: Vec<String>,
    pub location: Option<String>,
    pub linked_variant_id: Option<CharacterId>,
    pub unlock_level: u64,
    pub arrival_bonus: u64,
    pub house: Option<String>,
    pub minigame_cooldown_seconds: u64,
    pub minigame_skip_cost: u64,
    pub description: IndexMap<String, String>,
    pub images: ImageRefs,
}

impl Character {
    /// Display name in `language`, or in the fallback language when missing,
    /// with reserved separators stripped.
    #[must_use]
    pub fn resolved_name(&self, language: &str) -> Option<String> {
        localised(&self.id, "name", &self.names, language).map(sanitise)
    }

    #[must_use]
    pub fn resolved_description(&self, language: &str) -> Option<&str> {
        localised(&self.id, "description", &self.description, language)
    }

    /// Alternate names for `language`. These never fall back to another language.
    #[must_use]
    pub fn alternate_names(&self, language: &str) -> &[String] {
        self.alternate_names
            .get(language)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Every name this character is known by, in any language.
    pub fn all_names(&self) -> impl Iterator<Item = &String> {
        self.names
            .values()
            .chain(self.alternate_names.values().flatten())
    }

    #[cfg(test)]
    pub fn named(id: &str, english_name: &str) -> Self {
        let mut names = IndexMap::new();
        names.insert(FALLBACK_LANGUAGE.to_string(), english_name.to_string());
        Self {
            id: id.to_string(),
            names,
            alternate_names: IndexMap::new(),
            tags: Vec::new(),
            location: None,
            linked_variant_id: None,
            unlock_level: 0,
            arrival_bonus: 0,
            house: None,
            minigame_cooldown_seconds: 0,
            minigame_skip_cost: 0,
            description: IndexMap::new(),
            images: ImageRefs::for_id(id),
        }
    }
}

fn localised<'a>(
    id: &str,
    field: &str,
    values: &'a IndexMap<String, String>,
    language: &str,
) -> Option<&'a str> {
    if let Some(value) = values.get(language) {
        return Some(value.as_str());
    }

    let fallback = values.get(FALLBACK_LANGUAGE)?;
    log::debug!("{id} has no {field} in {language}, using {FALLBACK_LANGUAGE}");
    Some(fallback.as_str())
}

/// A copy of one character handed to views, with the name it was found under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterRef {
    pub id: CharacterId,
    pub name: String,
    pub character: Character,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_character() -> Character {
        let mut character = Character::named("Pony_Apple_Jack", "Apple|Jack");
        character
            .names
            .insert(String::from("french"), String::from("Apple Jack FR"));
        character.alternate_names.insert(
            String::from("english"),
            vec![String::from("AJ"), String::from("Applejack")],
        );
        character
            .description
            .insert(String::from("english"), String::from("Farm pony"));
        character
    }

    #[test]
    fn test_resolved_name_active_language() {
        let character = create_test_character();
        assert_eq!(
            character.resolved_name("french"),
            Some(String::from("Apple Jack FR"))
        );
    }

    #[test]
    fn test_resolved_name_falls_back_and_sanitises() {
        let character = create_test_character();
        assert_eq!(
            character.resolved_name("german"),
            Some(String::from("AppleJack"))
        );
    }

    #[test]
    fn test_resolved_name_without_fallback() {
        let mut character = create_test_character();
        character.names.shift_remove("english");
        assert_eq!(character.resolved_name("german"), None);
    }

    #[test]
    fn test_resolved_description_falls_back() {
        let character = create_test_character();
        assert_eq!(character.resolved_description("french"), Some("Farm pony"));
    }

    #[test]
    fn test_alternate_names_no_fallback() {
        let character = create_test_character();
        assert_eq!(character.alternate_names("english").len(), 2);
        assert!(character.alternate_names("french").is_empty());
    }

    #[test]
    fn test_all_names() {
        let character = create_test_character();
        let names: Vec<&String> = character.all_names().collect();
        assert_eq!(names.len(), 4);
    }

    #[test]
    fn test_default_image_refs() {
        let images = ImageRefs::for_id("Pony_Rarity");
        assert_eq!(images.portrait, "/assets/images/ponies/portrait/Pony_Rarity.png");
        assert_eq!(images.full, "/assets/images/ponies/shop/Pony_Rarity.png");
    }
}
