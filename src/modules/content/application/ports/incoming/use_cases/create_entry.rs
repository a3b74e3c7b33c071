use async_trait::async_trait;

use super::validation::{validate_entry_fields, EntryValidationError};
use crate::content::application::domain::entities::Collection;
use crate::content::application::ports::outgoing::{ContentRow, FieldMap};

//
// ──────────────────────────────────────────────────────────
// Create Entry Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreateEntryCommand {
    collection: Collection,
    fields: FieldMap,
}

impl CreateEntryCommand {
    pub fn new(collection: Collection, fields: FieldMap) -> Result<Self, EntryValidationError> {
        validate_entry_fields(collection, &fields, true)?;

        Ok(Self { collection, fields })
    }

    pub fn collection(&self) -> Collection {
        self.collection
    }

    pub fn into_fields(self) -> FieldMap {
        self.fields
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateEntryError {
    #[error("Store error: {0}")]
    StoreError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateEntryUseCase: Send + Sync {
    async fn execute(&self, command: CreateEntryCommand) -> Result<ContentRow, CreateEntryError>;
}
