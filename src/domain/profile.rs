use crate::domain::character::{Character, CharacterId, ImageRefs};
use crate::domain::utils::title_case;
use crate::ports::outbound::localization::Localization;

/// Detail view of one character in one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub id: CharacterId,
    pub name: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub unlock_level: u64,
    pub arrival_bonus: u64,
    pub house: Option<String>,
    pub minigame_cooldown: String,
    pub minigame_skip_cost: u64,
    pub images: ImageRefs,
}

impl Profile {
    pub fn from<L: Localization + ?Sized>(
        character: &Character,
        language: &str,
        localization: &L,
    ) -> Option<Self> {
        Some(Self {
            id: character.id.clone(),
            name: character.resolved_name(language)?,
            description: character.resolved_description(language).map(String::from),
            location: character
                .location
                .as_deref()
                .map(|location| title_case(&localization.translate(location, language))),
            unlock_level: character.unlock_level,
            arrival_bonus: character.arrival_bonus,
            house: character.house.clone(),
            minigame_cooldown: format!("{}s", character.minigame_cooldown_seconds),
            minigame_skip_cost: character.minigame_skip_cost,
            images: character.images.clone(),
        })
    }
}
