use crate::domain::catalog::Catalog;
use crate::domain::character::{Character, CharacterId};
use crate::domain::options::{GameOptions, InclusionFilter, NormalizationConfig};
use crate::domain::utils::{normalise, sanitise, title_case};
use crate::ports::outbound::localization::Localization;
use indexmap::map::Entry;
use indexmap::IndexMap;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    pub character_id: CharacterId,
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Namespace {
    Primary,
    Alternate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConflictKind {
    /// Still collided after appending the location. `existing` kept the slot.
    Unresolved { existing: CharacterId },
    /// Collided and there was no location to tell the two apart.
    NoLocation { existing: CharacterId },
    /// The name normalised to nothing.
    EmptyKey,
    /// No name in the active language nor in the fallback language.
    MissingName,
}

/// A catalog entry that could not be indexed as given. Never fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataQualityConflict {
    pub character_id: CharacterId,
    pub name: String,
    pub namespace: Namespace,
    pub kind: ConflictKind,
}

/// Lookup structure for one language and one set of options.
///
/// Built in one go and never changed afterwards: a language or option change
/// builds a fresh index that replaces this one wholesale.
#[derive(Debug, Clone)]
pub struct NameIndex {
    pub(crate) catalog: Arc<Catalog>,
    pub(crate) language: String,
    pub(crate) config: NormalizationConfig,
    pub(crate) primary: IndexMap<String, IndexEntry>,
    pub(crate) alternate: IndexMap<String, IndexEntry>,
    pub(crate) search_names: Vec<Vec<String>>,
    conflicts: Vec<DataQualityConflict>,
}

impl NameIndex {
    /// Indexes every admitted character in catalog order. Collisions are
    /// settled first come, first served, so the same inputs always give the
    /// same index.
    pub fn build<L: Localization + ?Sized>(
        catalog: Arc<Catalog>,
        language: &str,
        options: &GameOptions,
        localization: &L,
    ) -> Self {
        let filter = options.inclusion_filter();
        let config = options.normalization;

        let mut builder = Builder {
            catalog: &catalog,
            language,
            config,
            localization,
            primary: IndexMap::new(),
            alternate: IndexMap::new(),
            conflicts: Vec::new(),
        };

        for character in catalog.characters() {
            builder.add(character, &filter);
        }

        let Builder {
            primary,
            alternate,
            conflicts,
            ..
        } = builder;

        let search_names = catalog
            .characters()
            .iter()
            .map(|character| search_names(character, &config))
            .collect();

        Self {
            language: language.to_string(),
            config,
            primary,
            alternate,
            search_names,
            conflicts,
            catalog,
        }
    }

    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    #[must_use]
    pub fn config(&self) -> &NormalizationConfig {
        &self.config
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Number of characters reachable under a primary name.
    #[must_use]
    pub fn total_count(&self) -> usize {
        self.primary.len()
    }

    #[must_use]
    pub fn primary(&self, key: &str) -> Option<&IndexEntry> {
        self.primary.get(key)
    }

    #[must_use]
    pub fn alternate(&self, key: &str) -> Option<&IndexEntry> {
        self.alternate.get(key)
    }

    pub fn alternate_entries(&self) -> impl Iterator<Item = (&String, &IndexEntry)> {
        self.alternate.iter()
    }

    #[must_use]
    pub fn conflicts(&self) -> &[DataQualityConflict] {
        &self.conflicts
    }
}

struct Builder<'a, L: ?Sized> {
    catalog: &'a Catalog,
    language: &'a str,
    config: NormalizationConfig,
    localization: &'a L,
    primary: IndexMap<String, IndexEntry>,
    alternate: IndexMap<String, IndexEntry>,
    conflicts: Vec<DataQualityConflict>,
}

impl<L: Localization + ?Sized> Builder<'_, L> {
    fn add(&mut self, character: &Character, filter: &InclusionFilter) {
        if !filter.admits(character) {
            log::debug!("{} not included", character.id);
            return;
        }

        match character.resolved_name(self.language) {
            Some(name) => self.insert(Namespace::Primary, character, name),
            None => self.conflict(character, String::new(), Namespace::Primary, ConflictKind::MissingName),
        }

        for name in character.alternate_names(self.language) {
            self.insert(Namespace::Alternate, character, sanitise(name));
        }
    }

    fn insert(&mut self, namespace: Namespace, character: &Character, name: String) {
        let key = normalise(&name, &self.config);
        if key.is_empty() {
            self.conflict(character, name, namespace, ConflictKind::EmptyKey);
            return;
        }

        let slots = match namespace {
            Namespace::Primary => &mut self.primary,
            Namespace::Alternate => &mut self.alternate,
        };

        let existing = match slots.entry(key) {
            Entry::Vacant(slot) => {
                slot.insert(IndexEntry {
                    character_id: character.id.clone(),
                    name,
                });
                return;
            }
            Entry::Occupied(slot) => slot.get().clone(),
        };

        if existing.character_id == character.id {
            log::debug!("{} already indexed under '{}'", character.id, existing.name);
            return;
        }

        if is_expected_variant(self.catalog, self.language, character, &existing) {
            log::debug!("{} is a variant of {}, not indexing '{name}'", character.id, existing.character_id);
            return;
        }

        let Some(location) = character.location.as_deref() else {
            self.conflict(
                character,
                name,
                namespace,
                ConflictKind::NoLocation {
                    existing: existing.character_id,
                },
            );
            return;
        };

        let disambiguated = format!(
            "{name} ({})",
            title_case(&self.localization.translate(location, self.language))
        );
        let key = normalise(&disambiguated, &self.config);

        let slots = match namespace {
            Namespace::Primary => &mut self.primary,
            Namespace::Alternate => &mut self.alternate,
        };

        let winner = match slots.entry(key) {
            Entry::Vacant(slot) => {
                log::debug!("{} indexed as '{disambiguated}'", character.id);
                slot.insert(IndexEntry {
                    character_id: character.id.clone(),
                    name: disambiguated,
                });
                return;
            }
            Entry::Occupied(slot) => slot.get().character_id.clone(),
        };

        self.conflict(
            character,
            disambiguated,
            namespace,
            ConflictKind::Unresolved { existing: winner },
        );
    }

    fn conflict(
        &mut self,
        character: &Character,
        name: String,
        namespace: Namespace,
        kind: ConflictKind,
    ) {
        log::warn!(
            "Data quality conflict for {} ('{name}', {namespace:?}): {kind:?}",
            character.id
        );
        self.conflicts.push(DataQualityConflict {
            character_id: character.id.clone(),
            name,
            namespace,
            kind,
        });
    }
}

/// A variant sharing its base character's slot is expected, not a clash.
fn is_expected_variant(
    catalog: &Catalog,
    language: &str,
    character: &Character,
    existing: &IndexEntry,
) -> bool {
    let Some(linked_id) = character.linked_variant_id.as_deref() else {
        return false;
    };

    if existing.character_id == linked_id {
        return true;
    }

    catalog
        .character(linked_id)
        .and_then(|linked| linked.resolved_name(language))
        .is_some_and(|linked_name| linked_name == existing.name)
}

/// Every name of `character` in every language, normalised, without repeats.
fn search_names(character: &Character, config: &NormalizationConfig) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for name in character.all_names() {
        let key = normalise(&sanitise(name), config);
        if !key.is_empty() && !names.contains(&key) {
            names.push(key);
        }
    }
    names
}
