use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::{character::CharacterRepository, stat::StatRepository},
    error::AppError,
    model::character::{Character, CreateCharacterParams, FullCharacter},
};

pub struct CharacterService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CharacterService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a character for the user in `params`.
    ///
    /// # Returns
    /// - `Ok(Character)` - Created character
    /// - `Err(AppError::NotFound("stats not found"))` - `stats_id` references no stat
    pub async fn create(&self, params: CreateCharacterParams) -> Result<Character, AppError> {
        if let Some(stats_id) = params.stats_id {
            let stat_repo = StatRepository::new(self.db);
            if !stat_repo.exists(stats_id).await? {
                return Err(AppError::NotFound("stats not found".to_string()));
            }
        }

        let repo = CharacterRepository::new(self.db);

        Ok(repo.create(params).await?)
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Character, AppError> {
        let repo = CharacterRepository::new(self.db);

        repo.get_by_id(id).await?.ok_or_else(character_not_found)
    }

    pub async fn get_by_user_id(&self, user_id: &str) -> Result<Vec<Character>, AppError> {
        let repo = CharacterRepository::new(self.db);

        Ok(repo.get_by_user_id(user_id).await?)
    }

    /// Gets a user's characters that have stats, joined with those stats.
    pub async fn get_full_by_user_id(&self, user_id: &str) -> Result<Vec<FullCharacter>, AppError> {
        let repo = CharacterRepository::new(self.db);

        Ok(repo.get_full_by_user_id(user_id).await?)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let repo = CharacterRepository::new(self.db);

        if !repo.delete(id).await? {
            return Err(character_not_found());
        }

        Ok(())
    }
}

fn character_not_found() -> AppError {
    AppError::NotFound("character not found".to_string())
}
