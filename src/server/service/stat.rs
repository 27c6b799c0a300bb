use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::stat::StatRepository,
    error::AppError,
    model::stat::{Stat, StatParams},
};

pub struct StatService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StatService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: StatParams) -> Result<Stat, AppError> {
        let repo = StatRepository::new(self.db);

        Ok(repo.create(params).await?)
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Stat, AppError> {
        let repo = StatRepository::new(self.db);

        repo.get_by_id(id).await?.ok_or_else(stat_not_found)
    }

    pub async fn update(&self, id: Uuid, params: StatParams) -> Result<Stat, AppError> {
        let repo = StatRepository::new(self.db);

        repo.update(id, params).await?.ok_or_else(stat_not_found)
    }

    /// Deletes a stat; characters using it keep existing without stats.
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let repo = StatRepository::new(self.db);

        if !repo.delete(id).await? {
            return Err(stat_not_found());
        }

        Ok(())
    }
}

fn stat_not_found() -> AppError {
    AppError::NotFound("stat not found".to_string())
}
