use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create content_entries table
        //
        // One table backs every content collection; `collection`
        // discriminates, `fields` carries the entry's field bag,
        // and the two filter/sort attributes the store must query
        // on (`category`, `display_order`) are mirrored into
        // dedicated columns.
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(ContentEntries::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ContentEntries::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(
                        ColumnDef::new(ContentEntries::Collection)
                            .string_len(32)
                            .not_null(),
                    )
                    .col(ColumnDef::new(ContentEntries::Category).string_len(32))
                    .col(
                        ColumnDef::new(ContentEntries::DisplayOrder)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(ContentEntries::Fields)
                            .json_binary()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ContentEntries::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(ContentEntries::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // The list query always filters on collection and sorts on
        // (display_order ASC, created_at DESC).
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_content_entries_collection_order")
                    .table(ContentEntries::Table)
                    .col(ContentEntries::Collection)
                    .col(ContentEntries::DisplayOrder)
                    .col(ContentEntries::CreatedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_content_entries_collection_category")
                    .table(ContentEntries::Table)
                    .col(ContentEntries::Collection)
                    .col(ContentEntries::Category)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ContentEntries::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum ContentEntries {
    Table,
    Id,
    Collection,
    Category,
    DisplayOrder,
    Fields,
    CreatedAt,
    UpdatedAt,
}
