use sea_orm_migration::{prelude::*, schema::*};

use crate::SESSION_TABLE;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Databases bootstrapped before migrations were tracked already carry the
        // session table alongside the initial schema.
        if manager.has_table(SESSION_TABLE).await? {
            return Ok(());
        }

        manager
            .create_table(
                Table::create()
                    .table(Character::Table)
                    .if_not_exists()
                    .col(pk_uuid(Character::Id))
                    .col(string(Character::UserId))
                    .col(string_len(Character::Name, 191))
                    .col(timestamp_with_time_zone(Character::CreatedAt))
                    .col(timestamp_with_time_zone(Character::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Character::Table).if_exists().to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Character {
    Table,
    Id,
    UserId,
    Name,
    ClassType,
    StatsId,
    CreatedAt,
    UpdatedAt,
}
