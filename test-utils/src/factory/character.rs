//! Character factory for creating test character entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test characters with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let character = CharacterFactory::new(&db)
///     .user_id("2f0c...")
///     .name("Aragorn")
///     .class_type("ranger")
///     .build()
///     .await?;
/// ```
pub struct CharacterFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: String,
    name: String,
    class_type: Option<String>,
    stats_id: Option<Uuid>,
}

impl<'a> CharacterFactory<'a> {
    /// Creates a new CharacterFactory with default values.
    ///
    /// Defaults:
    /// - user_id: `"user-{id}"`
    /// - name: `"Character {id}"`
    /// - class_type and stats_id: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            user_id: format!("user-{}", id),
            name: format!("Character {}", id),
            class_type: None,
            stats_id: None,
        }
    }

    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = user_id.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn class_type(mut self, class_type: impl Into<String>) -> Self {
        self.class_type = Some(class_type.into());
        self
    }

    pub fn stats_id(mut self, stats_id: Uuid) -> Self {
        self.stats_id = Some(stats_id);
        self
    }

    /// Builds and inserts the character entity with a random id.
    pub async fn build(self) -> Result<entity::character::Model, DbErr> {
        let now = Utc::now();
        entity::character::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            user_id: ActiveValue::Set(self.user_id),
            name: ActiveValue::Set(self.name),
            class_type: ActiveValue::Set(self.class_type),
            stats_id: ActiveValue::Set(self.stats_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a character owned by `user_id` with otherwise default values.
pub async fn create_character(
    db: &DatabaseConnection,
    user_id: &str,
) -> Result<entity::character::Model, DbErr> {
    CharacterFactory::new(db).user_id(user_id).build().await
}
