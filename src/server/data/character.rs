use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::{
    model::character::{Character, CreateCharacterParams, FullCharacter},
    util::time,
};

pub struct CharacterRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CharacterRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new character with a generated ID.
    ///
    /// Does not check that `stats_id` exists; callers validate it first.
    pub async fn create(&self, params: CreateCharacterParams) -> Result<Character, DbErr> {
        let now = time::now();

        let character = entity::character::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            user_id: ActiveValue::Set(params.user_id),
            name: ActiveValue::Set(params.name),
            class_type: ActiveValue::Set(params.class_type),
            stats_id: ActiveValue::Set(params.stats_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        Ok(Character::from_entity(character))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<Character>, DbErr> {
        let character = entity::prelude::Character::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(character.map(Character::from_entity))
    }

    /// Gets all characters owned by a user, oldest first.
    ///
    /// # Arguments
    /// - `user_id` - Keycloak ID of the owner
    ///
    /// # Returns
    /// - `Ok(Vec<Character>)` - Characters of the user, empty if they have none
    /// - `Err(DbErr)` - Database error
    pub async fn get_by_user_id(&self, user_id: &str) -> Result<Vec<Character>, DbErr> {
        let characters = entity::prelude::Character::find()
            .filter(entity::character::Column::UserId.eq(user_id))
            .order_by_asc(entity::character::Column::CreatedAt)
            .order_by_asc(entity::character::Column::Id)
            .all(self.db)
            .await?;

        Ok(characters.into_iter().map(Character::from_entity).collect())
    }

    /// Gets a user's characters joined with their stats.
    ///
    /// Characters without stats, or whose stats row is gone, are left out.
    pub async fn get_full_by_user_id(&self, user_id: &str) -> Result<Vec<FullCharacter>, DbErr> {
        let rows = entity::prelude::Character::find()
            .filter(entity::character::Column::UserId.eq(user_id))
            .find_also_related(entity::prelude::Stat)
            .order_by_asc(entity::character::Column::CreatedAt)
            .order_by_asc(entity::character::Column::Id)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(character, stat)| {
                stat.map(|stat| FullCharacter::from_entities(character, stat))
            })
            .collect())
    }

    /// Deletes a character.
    ///
    /// # Returns
    /// - `Ok(true)` - Character deleted
    /// - `Ok(false)` - No character with that ID
    /// - `Err(DbErr)` - Database error
    pub async fn delete(&self, id: Uuid) -> Result<bool, DbErr> {
        let result = entity::prelude::Character::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
