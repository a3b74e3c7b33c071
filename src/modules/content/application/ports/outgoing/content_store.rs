use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};
use uuid::Uuid;

use crate::content::application::domain::entities::{Category, Collection};

/// The free-form part of an entry: everything that is not an id, ordering
/// or timestamp column.
pub type FieldMap = serde_json::Map<String, serde_json::Value>;

//
// ──────────────────────────────────────────────────────────
// Row shapes
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq)]
pub struct ContentRow {
    pub id: Uuid,
    pub collection: Collection,
    /// Stored verbatim; the read path tolerates null/unknown values.
    pub category: Option<String>,
    pub display_order: i32,
    pub fields: FieldMap,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewContentRow {
    pub collection: Collection,
    pub category: Option<Category>,
    pub display_order: i32,
    pub fields: FieldMap,
}

/// Partial update: only supplied attributes are overwritten.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContentPatch {
    pub category: Option<Category>,
    pub display_order: Option<i32>,
    pub fields: FieldMap,
}

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ContentStoreError {
    #[error("Entry not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Row-level access to the managed content store.
///
/// `list` always returns the collection's presentation order:
/// `display_order` ascending, ties broken by newest `created_at` first.
#[async_trait]
pub trait ContentStore: Send + Sync {
    async fn list(
        &self,
        collection: Collection,
        category: Option<Category>,
    ) -> Result<Vec<ContentRow>, ContentStoreError>;

    async fn insert(&self, data: NewContentRow) -> Result<ContentRow, ContentStoreError>;

    async fn update(
        &self,
        collection: Collection,
        id: Uuid,
        patch: ContentPatch,
    ) -> Result<ContentRow, ContentStoreError>;

    async fn delete(&self, collection: Collection, id: Uuid) -> Result<(), ContentStoreError>;
}
