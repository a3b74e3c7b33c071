use async_trait::async_trait;

use crate::content::application::ports::{
    incoming::use_cases::{ListEntriesError, ListEntriesQuery, ListEntriesUseCase},
    outgoing::{ContentRow, ContentStore},
};

#[derive(Debug, Clone)]
pub struct ListEntriesService<S>
where
    S: ContentStore + Send + Sync,
{
    store: S,
}

impl<S> ListEntriesService<S>
where
    S: ContentStore + Send + Sync,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S> ListEntriesUseCase for ListEntriesService<S>
where
    S: ContentStore + Send + Sync,
{
    async fn execute(&self, query: ListEntriesQuery) -> Result<Vec<ContentRow>, ListEntriesError> {
        self.store
            .list(query.collection, query.category)
            .await
            .map_err(|e| ListEntriesError::StoreError(e.to_string()))
    }
}
