use async_trait::async_trait;

use crate::content::application::domain::entities::{Category, Collection};
use crate::content::application::ports::outgoing::ContentRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListEntriesQuery {
    pub collection: Collection,
    pub category: Option<Category>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListEntriesError {
    #[error("Store error: {0}")]
    StoreError(String),
}

#[async_trait]
pub trait ListEntriesUseCase: Send + Sync {
    async fn execute(&self, query: ListEntriesQuery) -> Result<Vec<ContentRow>, ListEntriesError>;
}
