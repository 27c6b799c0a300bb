use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, TransactionTrait,
};
use uuid::Uuid;

use crate::server::{
    model::stat::{Stat, StatParams},
    util::time,
};

pub struct StatRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StatRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new stat with a generated ID.
    pub async fn create(&self, params: StatParams) -> Result<Stat, DbErr> {
        let now = time::now();

        let stat = entity::stat::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            level: ActiveValue::Set(params.level),
            experience: ActiveValue::Set(params.experience),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        Ok(Stat::from_entity(stat))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<Stat>, DbErr> {
        let stat = entity::prelude::Stat::find_by_id(id).one(self.db).await?;

        Ok(stat.map(Stat::from_entity))
    }

    pub async fn exists(&self, id: Uuid) -> Result<bool, DbErr> {
        Ok(entity::prelude::Stat::find_by_id(id)
            .one(self.db)
            .await?
            .is_some())
    }

    /// Replaces level and experience of a stat.
    ///
    /// # Returns
    /// - `Ok(Some(Stat))` - Updated stat
    /// - `Ok(None)` - No stat with that ID
    /// - `Err(DbErr)` - Database error
    pub async fn update(&self, id: Uuid, params: StatParams) -> Result<Option<Stat>, DbErr> {
        let Some(stat) = entity::prelude::Stat::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::stat::ActiveModel = stat.into();
        active_model.level = ActiveValue::Set(params.level);
        active_model.experience = ActiveValue::Set(params.experience);
        active_model.updated_at = ActiveValue::Set(time::now());

        let stat = active_model.update(self.db).await?;

        Ok(Some(Stat::from_entity(stat)))
    }

    /// Deletes a stat and detaches it from the characters referencing it.
    ///
    /// Both happen in one transaction; a failed delete leaves the references intact.
    ///
    /// # Returns
    /// - `Ok(true)` - Stat deleted
    /// - `Ok(false)` - No stat with that ID
    /// - `Err(DbErr)` - Database error
    pub async fn delete(&self, id: Uuid) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::Character::update_many()
            .col_expr(
                entity::character::Column::StatsId,
                Expr::value(Option::<Uuid>::None),
            )
            .filter(entity::character::Column::StatsId.eq(id))
            .exec(&txn)
            .await?;

        let result = entity::prelude::Stat::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }
}
