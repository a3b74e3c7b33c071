use async_trait::async_trait;
use uuid::Uuid;

use crate::content::application::domain::entities::Collection;

//
// ──────────────────────────────────────────────────────────
// Delete Entry Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteEntryCommand {
    collection: Collection,
    id: Uuid,
}

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum DeleteEntryCommandError {
    #[error("Entry id is required")]
    MissingId,

    #[error("Entry id is not a valid UUID")]
    InvalidId,
}

impl DeleteEntryCommand {
    /// The id arrives as a query-string parameter.
    pub fn new(collection: Collection, id: Option<&str>) -> Result<Self, DeleteEntryCommandError> {
        let raw = id
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or(DeleteEntryCommandError::MissingId)?;

        let id = Uuid::parse_str(raw).map_err(|_| DeleteEntryCommandError::InvalidId)?;

        Ok(Self { collection, id })
    }

    pub fn collection(&self) -> Collection {
        self.collection
    }

    pub fn id(&self) -> Uuid {
        self.id
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteEntryError {
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
pub trait DeleteEntryUseCase: Send + Sync {
    async fn execute(&self, command: DeleteEntryCommand) -> Result<(), DeleteEntryError>;
}
