use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

use crate::content::application::domain::entities::{Category, Collection};

#[derive(Debug, Clone, thiserror::Error)]
pub enum PublicContentError {
    #[error("Store error: {0}")]
    StoreError(String),
}

/// The dual response shape of the public skills endpoint: the flat ordered
/// list next to a category → members map.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GroupedSkills {
    pub data: Vec<Value>,
    pub grouped: BTreeMap<String, Vec<Value>>,
}

//
// ──────────────────────────────────────────────────────────
// Incoming Ports (Use Cases)
// ──────────────────────────────────────────────────────────
//

/// Ordered, normalized entries of one collection.
#[async_trait]
pub trait GetPublicEntriesUseCase: Send + Sync {
    async fn execute(
        &self,
        collection: Collection,
        category: Option<Category>,
    ) -> Result<Vec<Value>, PublicContentError>;
}

#[async_trait]
pub trait GetGroupedSkillsUseCase: Send + Sync {
    async fn execute(&self) -> Result<GroupedSkills, PublicContentError>;
}

/// The profile singleton; substitutes placeholder values when the row is
/// absent instead of failing.
#[async_trait]
pub trait GetPublicProfileUseCase: Send + Sync {
    async fn execute(&self) -> Result<Value, PublicContentError>;
}
