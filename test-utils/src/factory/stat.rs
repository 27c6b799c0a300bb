//! Stat factory for creating test stat entities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test stats with customizable fields.
pub struct StatFactory<'a> {
    db: &'a DatabaseConnection,
    level: i32,
    experience: i64,
}

impl<'a> StatFactory<'a> {
    /// Creates a new StatFactory with defaults: level 1, experience 0.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            level: 1,
            experience: 0,
        }
    }

    pub fn level(mut self, level: i32) -> Self {
        self.level = level;
        self
    }

    pub fn experience(mut self, experience: i64) -> Self {
        self.experience = experience;
        self
    }

    /// Builds and inserts the stat entity with a random id.
    pub async fn build(self) -> Result<entity::stat::Model, DbErr> {
        let now = Utc::now();
        entity::stat::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            level: ActiveValue::Set(self.level),
            experience: ActiveValue::Set(self.experience),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a stat with default values.
pub async fn create_stat(db: &DatabaseConnection) -> Result<entity::stat::Model, DbErr> {
    StatFactory::new(db).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use entity::prelude::*;

    #[tokio::test]
    async fn creates_stat_with_custom_values() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(Stat).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let stat = StatFactory::new(db).level(7).experience(1200).build().await?;

        assert_eq!(stat.level, 7);
        assert_eq!(stat.experience, 1200);

        Ok(())
    }
}
