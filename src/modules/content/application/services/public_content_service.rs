use async_trait::async_trait;
use serde_json::Value;

use crate::content::application::domain::entities::{Category, Collection};
use crate::content::application::domain::presentation;
use crate::content::application::ports::{
    incoming::use_cases::{
        GetGroupedSkillsUseCase, GetPublicEntriesUseCase, GetPublicProfileUseCase, GroupedSkills,
        PublicContentError,
    },
    outgoing::ContentStore,
};

/// One service backs all three public read shapes; they share the store
/// query and differ only in the presentation step.
#[derive(Debug, Clone)]
pub struct PublicContentService<S>
where
    S: ContentStore + Send + Sync,
{
    store: S,
}

impl<S> PublicContentService<S>
where
    S: ContentStore + Send + Sync,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }

    async fn normalized(
        &self,
        collection: Collection,
        category: Option<Category>,
    ) -> Result<Vec<Value>, PublicContentError> {
        let rows = self
            .store
            .list(collection, category)
            .await
            .map_err(|e| PublicContentError::StoreError(e.to_string()))?;

        Ok(rows.iter().map(presentation::normalize_entry).collect())
    }
}

#[async_trait]
impl<S> GetPublicEntriesUseCase for PublicContentService<S>
where
    S: ContentStore + Send + Sync,
{
    async fn execute(
        &self,
        collection: Collection,
        category: Option<Category>,
    ) -> Result<Vec<Value>, PublicContentError> {
        self.normalized(collection, category).await
    }
}

#[async_trait]
impl<S> GetGroupedSkillsUseCase for PublicContentService<S>
where
    S: ContentStore + Send + Sync,
{
    async fn execute(&self) -> Result<GroupedSkills, PublicContentError> {
        let data = self.normalized(Collection::Skills, None).await?;
        let grouped = presentation::group_skills(&data);

        Ok(GroupedSkills { data, grouped })
    }
}

#[async_trait]
impl<S> GetPublicProfileUseCase for PublicContentService<S>
where
    S: ContentStore + Send + Sync,
{
    async fn execute(&self) -> Result<Value, PublicContentError> {
        let mut entries = self.normalized(Collection::Profile, None).await?;

        if entries.is_empty() {
            return Ok(presentation::placeholder_profile());
        }

        Ok(entries.remove(0))
    }
}
