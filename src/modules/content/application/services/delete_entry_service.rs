use async_trait::async_trait;

use crate::content::application::ports::{
    incoming::use_cases::{DeleteEntryCommand, DeleteEntryError, DeleteEntryUseCase},
    outgoing::{ContentStore, ContentStoreError},
};

#[derive(Debug, Clone)]
pub struct DeleteEntryService<S>
where
    S: ContentStore + Send + Sync,
{
    store: S,
}

impl<S> DeleteEntryService<S>
where
    S: ContentStore + Send + Sync,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S> DeleteEntryUseCase for DeleteEntryService<S>
where
    S: ContentStore + Send + Sync,
{
    async fn execute(&self, command: DeleteEntryCommand) -> Result<(), DeleteEntryError> {
        self.store
            .delete(command.collection(), command.id())
            .await
            .map_err(|e| match e {
                ContentStoreError::NotFound => DeleteEntryError::NotFound,
                ContentStoreError::DatabaseError(msg) => DeleteEntryError::StoreError(msg),
            })
    }
}
