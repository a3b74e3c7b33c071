use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::content::application::domain::entities::Collection;
use crate::content::application::ports::outgoing::{ContentRow, ContentStoreError};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "content_entries")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub collection: String,

    pub category: Option<String>,

    pub display_order: i32,

    #[sea_orm(column_type = "JsonBinary")]
    pub fields: Json,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_content_row(&self) -> Result<ContentRow, ContentStoreError> {
        let collection = Collection::from_slug(&self.collection).ok_or_else(|| {
            ContentStoreError::DatabaseError(format!(
                "row {} belongs to unknown collection '{}'",
                self.id, self.collection
            ))
        })?;

        Ok(ContentRow {
            id: self.id,
            collection,
            category: self.category.clone(),
            display_order: self.display_order,
            fields: self.fields.as_object().cloned().unwrap_or_default(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
