use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter,
    QueryOrder, Set,
};
use serde_json::Value;
use std::sync::Arc;
use uuid::Uuid;

use crate::content::application::domain::entities::{Category, Collection};
use crate::content::application::ports::outgoing::{
    ContentPatch, ContentRow, ContentStore, ContentStoreError, NewContentRow,
};

// SeaORM entity imports
use super::sea_orm_entity::{
    ActiveModel as EntryActiveModel, Column as EntryColumn, Entity as EntryEntity,
    Model as EntryModel,
};

#[derive(Debug, Clone)]
pub struct ContentStorePostgres {
    db: Arc<DatabaseConnection>,
}

impl ContentStorePostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn find_one(
        &self,
        collection: Collection,
        id: Uuid,
    ) -> Result<EntryModel, ContentStoreError> {
        EntryEntity::find()
            .filter(EntryColumn::Id.eq(id))
            .filter(EntryColumn::Collection.eq(collection.slug()))
            .one(&*self.db)
            .await
            .map_err(|e| ContentStoreError::DatabaseError(e.to_string()))?
            .ok_or(ContentStoreError::NotFound)
    }
}

#[async_trait]
impl ContentStore for ContentStorePostgres {
    async fn list(
        &self,
        collection: Collection,
        category: Option<Category>,
    ) -> Result<Vec<ContentRow>, ContentStoreError> {
        let mut query =
            EntryEntity::find().filter(EntryColumn::Collection.eq(collection.slug()));

        if let Some(category) = category {
            query = query.filter(EntryColumn::Category.eq(category.slug()));
        }

        let models: Vec<EntryModel> = query
            .order_by_asc(EntryColumn::DisplayOrder)
            .order_by_desc(EntryColumn::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(|e| ContentStoreError::DatabaseError(e.to_string()))?;

        models.iter().map(EntryModel::to_content_row).collect()
    }

    async fn insert(&self, data: NewContentRow) -> Result<ContentRow, ContentStoreError> {
        let now = Utc::now().fixed_offset();

        let active = EntryActiveModel {
            id: Set(Uuid::new_v4()),
            collection: Set(data.collection.slug().to_string()),
            category: Set(data.category.map(|c| c.slug().to_string())),
            display_order: Set(data.display_order),
            fields: Set(Value::Object(data.fields)),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted: EntryModel = active
            .insert(&*self.db)
            .await
            .map_err(|e| ContentStoreError::DatabaseError(e.to_string()))?;

        inserted.to_content_row()
    }

    async fn update(
        &self,
        collection: Collection,
        id: Uuid,
        patch: ContentPatch,
    ) -> Result<ContentRow, ContentStoreError> {
        let current = self.find_one(collection, id).await?;

        // merge the patch over the stored bag; untouched keys survive
        let mut fields = current.fields.as_object().cloned().unwrap_or_default();
        for (key, value) in patch.fields {
            fields.insert(key, value);
        }

        let mut active: EntryActiveModel = current.into_active_model();
        active.fields = Set(Value::Object(fields));
        if let Some(category) = patch.category {
            active.category = Set(Some(category.slug().to_string()));
        }
        if let Some(display_order) = patch.display_order {
            active.display_order = Set(display_order);
        }
        active.updated_at = Set(Utc::now().fixed_offset());

        let updated: EntryModel = active
            .update(&*self.db)
            .await
            .map_err(|e| ContentStoreError::DatabaseError(e.to_string()))?;

        updated.to_content_row()
    }

    async fn delete(&self, collection: Collection, id: Uuid) -> Result<(), ContentStoreError> {
        let result = EntryEntity::delete_many()
            .filter(EntryColumn::Id.eq(id))
            .filter(EntryColumn::Collection.eq(collection.slug()))
            .exec(&*self.db)
            .await
            .map_err(|e| ContentStoreError::DatabaseError(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(ContentStoreError::NotFound);
        }

        Ok(())
    }
}
