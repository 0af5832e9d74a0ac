use crate::domain::catalog::RawCatalog;
use async_trait::async_trait;
use thiserror::Error;

#[cfg(test)]
use mockall::automock;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Couldn't read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("Couldn't parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait CatalogStore {
    async fn load(&self) -> Result<RawCatalog, CatalogError>;
}
