use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Stat::Table)
                    .if_not_exists()
                    .col(pk_uuid(Stat::Id))
                    .col(integer(Stat::Level))
                    .col(big_integer(Stat::Experience))
                    .col(timestamp_with_time_zone(Stat::CreatedAt))
                    .col(timestamp_with_time_zone(Stat::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Stat::Table).if_exists().to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Stat {
    Table,
    Id,
    Level,
    Experience,
    CreatedAt,
    UpdatedAt,
}
