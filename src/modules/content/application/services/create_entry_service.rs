use async_trait::async_trait;

use super::split_store_columns;
use crate::content::application::ports::{
    incoming::use_cases::{CreateEntryCommand, CreateEntryError, CreateEntryUseCase},
    outgoing::{ContentRow, ContentStore, NewContentRow},
};

#[derive(Debug, Clone)]
pub struct CreateEntryService<S>
where
    S: ContentStore + Send + Sync,
{
    store: S,
}

impl<S> CreateEntryService<S>
where
    S: ContentStore + Send + Sync,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S> CreateEntryUseCase for CreateEntryService<S>
where
    S: ContentStore + Send + Sync,
{
    async fn execute(&self, command: CreateEntryCommand) -> Result<ContentRow, CreateEntryError> {
        let collection = command.collection();
        let (category, display_order, fields) = split_store_columns(command.into_fields());

        let data = NewContentRow {
            collection,
            category,
            display_order: display_order.unwrap_or(0),
            fields,
        };

        self.store
            .insert(data)
            .await
            .map_err(|e| CreateEntryError::StoreError(e.to_string()))
    }
}
