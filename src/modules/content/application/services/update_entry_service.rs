use async_trait::async_trait;

use super::split_store_columns;
use crate::content::application::ports::{
    incoming::use_cases::{UpdateEntryCommand, UpdateEntryError, UpdateEntryUseCase},
    outgoing::{ContentPatch, ContentRow, ContentStore, ContentStoreError},
};

#[derive(Debug, Clone)]
pub struct UpdateEntryService<S>
where
    S: ContentStore + Send + Sync,
{
    store: S,
}

impl<S> UpdateEntryService<S>
where
    S: ContentStore + Send + Sync,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S> UpdateEntryUseCase for UpdateEntryService<S>
where
    S: ContentStore + Send + Sync,
{
    async fn execute(&self, command: UpdateEntryCommand) -> Result<ContentRow, UpdateEntryError> {
        let collection = command.collection();
        let id = command.id();
        let (category, display_order, fields) = split_store_columns(command.into_fields());

        let patch = ContentPatch {
            category,
            display_order,
            fields,
        };

        self.store
            .update(collection, id, patch)
            .await
            .map_err(|e| match e {
                ContentStoreError::NotFound => UpdateEntryError::NotFound,
                ContentStoreError::DatabaseError(msg) => UpdateEntryError::StoreError(msg),
            })
    }
}
