use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(NewsArticle::Table)
                    .if_not_exists()
                    .col(pk_auto(NewsArticle::Id))
                    .col(string_len(NewsArticle::Title, 191))
                    .col(text(NewsArticle::Contents))
                    .col(string_null(NewsArticle::ImageUrl))
                    .col(timestamp_with_time_zone(NewsArticle::CreatedAt))
                    .col(timestamp_with_time_zone(NewsArticle::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(NewsArticle::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
pub enum NewsArticle {
    Table,
    Id,
    Title,
    Contents,
    ImageUrl,
    CreatedAt,
    UpdatedAt,
}
