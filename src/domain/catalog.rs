use crate::domain::character::{Character, CharacterId, CharacterRef, ImageRefs};
use crate::ports::outbound::catalog_store::{CatalogError, CatalogStore};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::collections::HashMap;

/// The catalog document as stored: `{"ponies": {<id>: {...}}}`, in catalog order.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawCatalog {
    #[serde(default)]
    pub ponies: IndexMap<String, RawCharacter>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawCharacter {
    #[serde(default)]
    pub name: Option<IndexMap<String, Option<String>>>,
    #[serde(default)]
    pub alt_name: Option<IndexMap<String, Vec<String>>>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub changeling: Option<RawChangeling>,
    #[serde(default)]
    pub description: Option<IndexMap<String, Option<String>>>,
    #[serde(default)]
    pub image: Option<RawImages>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub unlock_level: Option<u64>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub arrival_xp: Option<u64>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub house: Option<String>,
    #[serde(default)]
    pub minigame: Option<RawMinigame>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawChangeling {
    #[serde(default)]
    pub id: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawImages {
    pub portrait: Option<String>,
    pub full: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawMinigame {
    #[serde(default, deserialize_with = "lenient_count")]
    pub cooldown: Option<u64>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub skip_cost: Option<u64>,
}

/// Display-only counts are passed through as given. Anything that isn't a
/// non-negative whole number is dropped so the rest of the entry still loads.
fn lenient_count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u64>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    let count = match &value {
        Value::Null => return Ok(None),
        Value::Number(number) => number.as_u64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    };

    if count.is_none() {
        log::warn!("Ignoring display value {value}: not a count");
    }
    Ok(count)
}

fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => None,
        Value::String(text) => Some(text),
        Value::Number(number) => Some(number.to_string()),
        other => {
            log::warn!("Ignoring display value {other}: not text");
            None
        }
    })
}

/// The loaded character set, in the order the document lists them.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    characters: Vec<Character>,
    positions: HashMap<CharacterId, usize>,
}

impl Catalog {
    /// Builds the character set from the raw document. The document itself is
    /// left untouched.
    #[must_use]
    pub fn from_raw(raw: &RawCatalog) -> Self {
        let mut characters = Vec::with_capacity(raw.ponies.len());
        for (id, entry) in &raw.ponies {
            match character_from_raw(id, entry) {
                Some(character) => characters.push(character),
                None => log::warn!("Skipping catalog entry {id}: it has no names"),
            }
        }

        Self::from_characters(characters)
    }

    #[must_use]
    pub fn from_characters(characters: Vec<Character>) -> Self {
        let positions = characters
            .iter()
            .enumerate()
            .map(|(position, character)| (character.id.clone(), position))
            .collect();

        Self {
            characters,
            positions,
        }
    }

    #[must_use]
    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    #[must_use]
    pub fn character(&self, id: &str) -> Option<&Character> {
        self.positions
            .get(id)
            .and_then(|&position| self.characters.get(position))
    }

    /// A copy of one character with its name resolved for `language`.
    #[must_use]
    pub fn get(&self, id: &str, language: &str) -> Option<CharacterRef> {
        let character = self.character(id)?;
        let name = character.resolved_name(language)?;
        Some(CharacterRef {
            id: character.id.clone(),
            name,
            character: character.clone(),
        })
    }

    /// Like [`Catalog::get`] but keeps the name the character was found under.
    #[must_use]
    pub fn get_as(&self, id: &str, used_name: &str) -> Option<CharacterRef> {
        let character = self.character(id)?;
        Some(CharacterRef {
            id: character.id.clone(),
            name: used_name.to_string(),
            character: character.clone(),
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.characters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }
}

fn present_strings(values: Option<&IndexMap<String, Option<String>>>) -> IndexMap<String, String> {
    values
        .into_iter()
        .flatten()
        .filter_map(|(language, value)| match value.as_deref() {
            Some(value) if !value.is_empty() => Some((language.clone(), value.to_string())),
            _ => None,
        })
        .collect()
}

fn character_from_raw(id: &str, entry: &RawCharacter) -> Option<Character> {
    let names = present_strings(entry.name.as_ref());
    if names.is_empty() {
        return None;
    }

    let images = match &entry.image {
        Some(RawImages {
            portrait: Some(portrait),
            full: Some(full),
        }) => ImageRefs {
            portrait: portrait.clone(),
            full: full.clone(),
        },
        _ => ImageRefs::for_id(id),
    };

    let linked_variant_id = entry
        .changeling
        .as_ref()
        .and_then(|changeling| changeling.id.clone())
        .filter(|linked| !linked.is_empty());

    let minigame = entry.minigame.clone().unwrap_or_default();

    Some(Character {
        id: id.to_string(),
        names,
        alternate_names: entry.alt_name.clone().unwrap_or_default(),
        tags: entry.tags.clone().unwrap_or_default(),
        location: entry.location.clone().filter(|location| !location.is_empty()),
        linked_variant_id,
        unlock_level: entry.unlock_level.unwrap_or_default(),
        arrival_bonus: entry.arrival_xp.unwrap_or_default(),
        house: entry.house.clone(),
        minigame_cooldown_seconds: minigame.cooldown.unwrap_or_default(),
        minigame_skip_cost: minigame.skip_cost.unwrap_or_default(),
        description: present_strings(entry.description.as_ref()),
        images,
    })
}

pub async fn load<CS: CatalogStore + Send + Sync>(store: &CS) -> Result<Catalog, CatalogError> {
    let raw = store.load().await?;
    let catalog = Catalog::from_raw(&raw);
    log::info!(
        "Loaded {} characters ({} entries in document)",
        catalog.len(),
        raw.ponies.len()
    );
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::catalog_store::MockCatalogStore;

    const DOCUMENT: &str = r#"{
        "ponies": {
            "Pony_Zecora": {
                "name": {"english": "Zecora", "french": "Zécora"},
                "alt_name": {"english": ["Zeki"]},
                "tags": [],
                "location": "EVERFREE_FOREST",
                "changeling": {"is_changeling": false, "id": "", "IAmAlterSet": false},
                "description": {"english": "A zebra", "french": ""},
                "image": {"portrait": "/p/zecora.png", "full": "/f/zecora.png"},
                "unlock_level": 12,
                "arrival_xp": 150,
                "house": "Zecora_Hut",
                "minigame": {"can_play_minecart": true, "cooldown": 3600, "skip_cost": 5},
                "index": 7,
                "wiki_path": "Zecora"
            },
            "Pony_Apple_Bloom": {
                "name": {"english": "Apple Bloom"}
            },
            "Pony_Nameless": {
                "name": {}
            },
            "Pony_Changeling_Bloom": {
                "name": {"english": "Apple Bloom", "german": null},
                "changeling": {"id": "Pony_Apple_Bloom"},
                "tags": null,
                "house": null
            }
        }
    }"#;

    fn raw() -> RawCatalog {
        serde_json::from_str(DOCUMENT).unwrap()
    }

    #[test]
    fn test_from_raw_keeps_document_order() {
        let catalog = Catalog::from_raw(&raw());
        let ids: Vec<&str> = catalog.characters().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["Pony_Zecora", "Pony_Apple_Bloom", "Pony_Changeling_Bloom"]
        );
    }

    #[test]
    fn test_from_raw_skips_nameless_entries() {
        let catalog = Catalog::from_raw(&raw());
        assert_eq!(catalog.len(), 3);
        assert!(catalog.character("Pony_Nameless").is_none());
    }

    #[test]
    fn test_from_raw_maps_every_field() {
        let catalog = Catalog::from_raw(&raw());
        let zecora = catalog.character("Pony_Zecora").unwrap();

        assert_eq!(zecora.names.get("french").map(String::as_str), Some("Zécora"));
        assert_eq!(zecora.alternate_names("english"), &[String::from("Zeki")]);
        assert_eq!(zecora.location.as_deref(), Some("EVERFREE_FOREST"));
        assert_eq!(zecora.linked_variant_id, None);
        assert_eq!(zecora.unlock_level, 12);
        assert_eq!(zecora.arrival_bonus, 150);
        assert_eq!(zecora.house.as_deref(), Some("Zecora_Hut"));
        assert_eq!(zecora.minigame_cooldown_seconds, 3600);
        assert_eq!(zecora.minigame_skip_cost, 5);
        assert_eq!(zecora.images.portrait, "/p/zecora.png");
    }

    #[test]
    fn test_from_raw_drops_empty_translations() {
        let catalog = Catalog::from_raw(&raw());
        let zecora = catalog.character("Pony_Zecora").unwrap();
        assert!(!zecora.description.contains_key("french"));
        assert_eq!(zecora.resolved_description("french"), Some("A zebra"));
    }

    #[test]
    fn test_from_raw_defaults() {
        let catalog = Catalog::from_raw(&raw());
        let bloom = catalog.character("Pony_Apple_Bloom").unwrap();

        assert!(bloom.tags.is_empty());
        assert!(bloom.alternate_names.is_empty());
        assert_eq!(bloom.location, None);
        assert_eq!(bloom.unlock_level, 0);
        assert_eq!(bloom.images, ImageRefs::for_id("Pony_Apple_Bloom"));
    }

    #[test]
    fn test_from_raw_reads_changeling_link() {
        let catalog = Catalog::from_raw(&raw());
        let changeling = catalog.character("Pony_Changeling_Bloom").unwrap();
        assert_eq!(
            changeling.linked_variant_id.as_deref(),
            Some("Pony_Apple_Bloom")
        );
        assert!(!changeling.names.contains_key("german"));
    }

    #[test]
    fn test_get_resolves_name_and_copies() {
        let catalog = Catalog::from_raw(&raw());
        let character = catalog.get("Pony_Zecora", "german").unwrap();

        assert_eq!(character.id, "Pony_Zecora");
        assert_eq!(character.name, "Zecora");
        assert_eq!(&character.character, catalog.character("Pony_Zecora").unwrap());
    }

    #[test]
    fn test_get_unknown_id() {
        let catalog = Catalog::from_raw(&raw());
        assert!(catalog.get("Pony_Unknown", "english").is_none());
    }

    #[test]
    fn test_get_as_keeps_used_name() {
        let catalog = Catalog::from_raw(&raw());
        let character = catalog.get_as("Pony_Zecora", "Zeki").unwrap();
        assert_eq!(character.name, "Zeki");
    }

    #[test]
    fn test_malformed_display_values_fall_back() {
        let raw: RawCatalog = serde_json::from_str(
            r#"{"ponies": {
                "Pony_Odd": {
                    "name": {"english": "Odd"},
                    "unlock_level": -1,
                    "arrival_xp": "150",
                    "house": ["not", "text"],
                    "minigame": {"cooldown": 1.5, "skip_cost": {"gems": 3}}
                },
                "Pony_Even": {"name": {"english": "Even"}, "unlock_level": 4}
            }}"#,
        )
        .unwrap();

        let catalog = Catalog::from_raw(&raw);
        assert_eq!(catalog.len(), 2);

        let odd = catalog.character("Pony_Odd").unwrap();
        assert_eq!(odd.unlock_level, 0);
        assert_eq!(odd.arrival_bonus, 150);
        assert_eq!(odd.house, None);
        assert_eq!(odd.minigame_cooldown_seconds, 0);
        assert_eq!(odd.minigame_skip_cost, 0);
        assert_eq!(catalog.character("Pony_Even").unwrap().unlock_level, 4);
    }

    #[test]
    fn test_empty_document() {
        let raw: RawCatalog = serde_json::from_str("{}").unwrap();
        assert!(Catalog::from_raw(&raw).is_empty());
    }

    #[tokio::test]
    async fn test_load_from_store() {
        let mut store = MockCatalogStore::new();
        store.expect_load().times(1).returning(|| Ok(raw()));

        let catalog = load(&store).await.unwrap();
        assert_eq!(catalog.len(), 3);
    }

    #[tokio::test]
    async fn test_load_propagates_store_error() {
        let mut store = MockCatalogStore::new();
        store.expect_load().times(1).returning(|| {
            Err(CatalogError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "missing",
            )))
        });

        assert!(matches!(load(&store).await, Err(CatalogError::Io(_))));
    }
}
