pub mod file_system;

use crate::adapters::outbound::catalog_store::file_system::FileSystem;
use crate::config::Settings;
use crate::ports::outbound::catalog_store::CatalogStore;

#[must_use]
pub fn init_catalog_store(settings: &Settings) -> impl CatalogStore {
    FileSystem::new(settings.catalog_path.clone())
}
