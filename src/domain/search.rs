use crate::domain::character::{CharacterId, CharacterRef};
use crate::domain::name_index::{IndexEntry, NameIndex};
use crate::domain::utils::normalise;

impl NameIndex {
    /// The entry a typed guess resolves to. Alternate names win over primary
    /// names, and input that normalises to nothing never matches.
    #[must_use]
    pub fn lookup(&self, input: &str) -> Option<&IndexEntry> {
        let key = normalise(input, &self.config);
        if key.is_empty() {
            return None;
        }

        self.alternate.get(&key).or_else(|| self.primary.get(&key))
    }

    #[must_use]
    pub fn match_exact(&self, input: &str) -> Option<CharacterRef> {
        let entry = self.lookup(input)?;
        self.catalog.get_as(&entry.character_id, &entry.name)
    }

    /// Ids of every character whose names or id contain the query, in catalog
    /// order. An empty query returns the whole catalog.
    #[must_use]
    pub fn search(&self, input: &str) -> Vec<CharacterId> {
        let query = normalise(input, &self.config);

        self.catalog
            .characters()
            .iter()
            .zip(&self.search_names)
            .filter(|(character, names)| {
                query.is_empty()
                    || names.iter().any(|name| name.contains(&query))
                    || character.id.contains(&query)
            })
            .map(|(character, _)| character.id.clone())
            .collect()
    }
}
