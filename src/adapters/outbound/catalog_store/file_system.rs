use crate::domain::catalog::RawCatalog;
use crate::ports::outbound::catalog_store::{CatalogError, CatalogStore};
use async_trait::async_trait;
use std::path::PathBuf;

pub struct FileSystem {
    path: PathBuf,
}

impl FileSystem {
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl CatalogStore for FileSystem {
    async fn load(&self) -> Result<RawCatalog, CatalogError> {
        let text = match tokio::fs::read_to_string(&self.path).await {
            Ok(text) => text,
            Err(why) => {
                log::warn!("Error reading catalog {}: {why}", self.path.display());
                return Err(CatalogError::Io(why));
            }
        };

        Ok(serde_json::from_str(&text)?)
    }
}
