use sea_orm_migration::{prelude::*, schema::*};

use crate::m20240101_000000_initial_database::Character;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // SQLite only accepts one added column per ALTER TABLE.
        if !manager.has_column("character", "class_type").await? {
            manager
                .alter_table(
                    Table::alter()
                        .table(Character::Table)
                        .add_column(string_null(Character::ClassType))
                        .to_owned(),
                )
                .await?;
        }

        if !manager.has_column("character", "stats_id").await? {
            manager
                .alter_table(
                    Table::alter()
                        .table(Character::Table)
                        .add_column(uuid_null(Character::StatsId))
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        if manager.has_column("character", "stats_id").await? {
            manager
                .alter_table(
                    Table::alter()
                        .table(Character::Table)
                        .drop_column(Character::StatsId)
                        .to_owned(),
                )
                .await?;
        }

        if manager.has_column("character", "class_type").await? {
            manager
                .alter_table(
                    Table::alter()
                        .table(Character::Table)
                        .drop_column(Character::ClassType)
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }
}
