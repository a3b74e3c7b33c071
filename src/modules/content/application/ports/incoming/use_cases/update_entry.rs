use async_trait::async_trait;
use serde_json::Value;
use uuid::Uuid;

use super::validation::{validate_entry_fields, EntryValidationError};
use crate::content::application::domain::entities::Collection;
use crate::content::application::ports::outgoing::{ContentRow, FieldMap};

//
// ──────────────────────────────────────────────────────────
// Update Entry Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct UpdateEntryCommand {
    collection: Collection,
    id: Uuid,
    fields: FieldMap,
}

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum UpdateEntryCommandError {
    #[error("Entry id is required")]
    MissingId,

    #[error("Entry id is not a valid UUID")]
    InvalidId,

    #[error(transparent)]
    Invalid(#[from] EntryValidationError),
}

impl UpdateEntryCommand {
    /// The request body carries the id next to the patched fields; absence
    /// is a caller error, never a defaulting case.
    pub fn new(
        collection: Collection,
        mut body: FieldMap,
    ) -> Result<Self, UpdateEntryCommandError> {
        let id = match body.remove("id") {
            None | Some(Value::Null) => return Err(UpdateEntryCommandError::MissingId),
            Some(Value::String(raw)) => {
                Uuid::parse_str(&raw).map_err(|_| UpdateEntryCommandError::InvalidId)?
            }
            Some(_) => return Err(UpdateEntryCommandError::InvalidId),
        };

        validate_entry_fields(collection, &body, false)?;

        Ok(Self {
            collection,
            id,
            fields: body,
        })
    }

    pub fn collection(&self) -> Collection {
        self.collection
    }

    pub fn id(&self) -> Uuid {
        self.id
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
pub enum UpdateEntryError {
    #[error("Entry not found")]
    NotFound,

    #[error("Store error: {0}")]
    StoreError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait UpdateEntryUseCase: Send + Sync {
    async fn execute(&self, command: UpdateEntryCommand) -> Result<ContentRow, UpdateEntryError>;
}
