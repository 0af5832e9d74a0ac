use crate::domain::catalog::Catalog;
use crate::domain::character::{CharacterId, CharacterRef};
use crate::domain::name_index::NameIndex;
use crate::domain::options::GameOptions;
use crate::domain::profile::Profile;
use crate::ports::outbound::localization::Localization;
use std::sync::Arc;
use tokio::time::Instant;

/// Owns the loaded catalog and the index for the active language and options.
pub struct App<L> {
    catalog: Arc<Catalog>,
    localization: L,
    language: String,
    options: GameOptions,
    index: Arc<NameIndex>,
}

impl<L> App<L>
where
    L: Localization + Send + Sync,
{
    pub fn new(catalog: Catalog, localization: L, language: String, options: GameOptions) -> Self {
        let catalog = Arc::new(catalog);
        let index = Arc::new(build_index(&catalog, &language, &options, &localization));
        Self {
            catalog,
            localization,
            language,
            options,
            index,
        }
    }

    /// The index currently in use. Holders keep the version they fetched even
    /// after a rebuild, so fetch again after changing language or options.
    #[must_use]
    pub fn index(&self) -> Arc<NameIndex> {
        Arc::clone(&self.index)
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    #[must_use]
    pub fn options(&self) -> &GameOptions {
        &self.options
    }

    pub fn set_language(&mut self, language: String) {
        if language == self.language {
            return;
        }
        self.language = language;
        self.rebuild();
    }

    pub fn set_options(&mut self, options: GameOptions) {
        if options == self.options {
            return;
        }
        self.options = options;
        self.rebuild();
    }

    fn rebuild(&mut self) {
        let index = build_index(&self.catalog, &self.language, &self.options, &self.localization);
        self.index = Arc::new(index);
    }

    #[must_use]
    pub fn match_exact(&self, input: &str) -> Option<CharacterRef> {
        self.index.match_exact(input)
    }

    #[must_use]
    pub fn search(&self, query: &str) -> Vec<CharacterId> {
        self.index.search(query)
    }

    #[must_use]
    pub fn character(&self, id: &str) -> Option<CharacterRef> {
        self.catalog.get(id, &self.language)
    }

    #[must_use]
    pub fn profile(&self, id: &str) -> Option<Profile> {
        let character = self.catalog.character(id)?;
        Profile::from(character, &self.language, &self.localization)
    }
}

fn build_index<L: Localization + ?Sized>(
    catalog: &Arc<Catalog>,
    language: &str,
    options: &GameOptions,
    localization: &L,
) -> NameIndex {
    let start = Instant::now();
    let index = NameIndex::build(Arc::clone(catalog), language, options, localization);

    log::info!(
        "Built {language} index: {} names, {} alternate names, {} conflicts in {} ms",
        index.total_count(),
        index.alternate_entries().count(),
        index.conflicts().len(),
        start.elapsed().as_millis()
    );

    index
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::RawCatalog;
    use crate::ports::outbound::localization::MockLocalization;

    const DOCUMENT: &str = r#"{"ponies": {
        "p1": {"name": {"english": "Twilight Sparkle", "french": "Twilight Sparkle FR"}, "location": "CANTERLOT"},
        "p2": {"name": {"english": "Fluttershy", "french": "Fluttershy"}, "alt_name": {"french": ["Flutter"]}},
        "p3": {"name": {"english": "Camo Dash"}, "tags": ["unused"]}
    }}"#;

    fn create_app() -> App<MockLocalization> {
        let raw: RawCatalog = serde_json::from_str(DOCUMENT).unwrap();
        let mut localization = MockLocalization::new();
        localization
            .expect_translate()
            .returning(|key, _| key.to_string());

        App::new(
            Catalog::from_raw(&raw),
            localization,
            String::from("english"),
            GameOptions::default(),
        )
    }

    #[test]
    fn test_new_builds_index() {
        let app = create_app();
        assert_eq!(app.index().total_count(), 2);
        assert_eq!(app.match_exact("fluttershy").unwrap().id, "p2");
    }

    #[test]
    fn test_set_language_swaps_index() {
        let mut app = create_app();
        let before = app.index();

        app.set_language(String::from("french"));
        let after = app.index();

        assert!(!Arc::ptr_eq(&before, &after));
        assert_eq!(before.language(), "english");
        assert_eq!(after.language(), "french");
        assert!(before.match_exact("flutter").is_none());
        assert_eq!(after.match_exact("flutter").unwrap().id, "p2");
        assert_eq!(app.match_exact("twilight sparkle fr").unwrap().id, "p1");
    }

    #[test]
    fn test_same_language_keeps_index() {
        let mut app = create_app();
        let before = app.index();
        app.set_language(String::from("english"));
        assert!(Arc::ptr_eq(&before, &app.index()));
    }

    #[test]
    fn test_set_options_rebuilds() {
        let mut app = create_app();
        let mut options = *app.options();
        options.include_unused = true;

        app.set_options(options);

        assert_eq!(app.index().total_count(), 3);
        assert_eq!(app.match_exact("camo dash").unwrap().id, "p3");
    }

    #[test]
    fn test_character_uses_active_language() {
        let mut app = create_app();
        app.set_language(String::from("french"));

        let character = app.character("p1").unwrap();
        assert_eq!(character.name, "Twilight Sparkle FR");
        assert!(app.character("p9").is_none());
    }

    #[test]
    fn test_profile() {
        let app = create_app();
        let profile = app.profile("p1").unwrap();

        assert_eq!(profile.name, "Twilight Sparkle");
        assert_eq!(profile.location.as_deref(), Some("Canterlot"));
        assert!(app.profile("p9").is_none());
    }

    #[test]
    fn test_search_ignores_inclusion_filter() {
        let app = create_app();
        assert_eq!(app.search(""), vec!["p1", "p2", "p3"]);
    }
}
