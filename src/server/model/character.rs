//! Character domain models and parameters.
//!
//! Characters belong to a Keycloak user and optionally reference a stat row
//! holding their level and experience.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    model::character::{CharacterDto, CreateCharacterDto, FullCharacterDto},
    server::{error::AppError, util::time::truncate_to_seconds},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Character {
    pub id: Uuid,
    /// Keycloak ID of the owning user.
    pub user_id: String,
    pub name: String,
    pub class_type: Option<String>,
    pub stats_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Character {
    /// Converts an entity model to a character domain model at the repository boundary.
    pub fn from_entity(entity: entity::character::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            name: entity.name,
            class_type: entity.class_type,
            stats_id: entity.stats_id,
            created_at: truncate_to_seconds(entity.created_at),
            updated_at: truncate_to_seconds(entity.updated_at),
        }
    }

    pub fn into_dto(self) -> CharacterDto {
        CharacterDto {
            id: self.id,
            user_id: self.user_id,
            name: self.name,
            class_type: self.class_type,
            stats_id: self.stats_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Character together with the stats it references.
///
/// `updated_at` tracks the stats, which change far more often than the
/// character itself.
#[derive(Debug, Clone, PartialEq)]
pub struct FullCharacter {
    pub id: Uuid,
    pub name: String,
    pub class_type: Option<String>,
    pub level: i32,
    pub experience: i64,
    pub updated_at: DateTime<Utc>,
}

impl FullCharacter {
    /// Joins a character with its stat at the repository boundary.
    ///
    /// # Arguments
    /// - `character` - Character entity referencing `stat`
    /// - `stat` - Stat entity the character points at
    pub fn from_entities(character: entity::character::Model, stat: entity::stat::Model) -> Self {
        Self {
            id: character.id,
            name: character.name,
            class_type: character.class_type,
            level: stat.level,
            experience: stat.experience,
            updated_at: truncate_to_seconds(stat.updated_at),
        }
    }

    pub fn into_dto(self) -> FullCharacterDto {
        FullCharacterDto {
            id: self.id,
            name: self.name,
            class_type: self.class_type,
            level: self.level,
            experience: self.experience,
            updated_at: self.updated_at,
        }
    }
}

/// Validated parameters for creating a character.
#[derive(Debug, Clone)]
pub struct CreateCharacterParams {
    /// Keycloak ID of the logged-in user creating the character.
    pub user_id: String,
    pub name: String,
    pub class_type: Option<String>,
    pub stats_id: Option<Uuid>,
}

impl CreateCharacterParams {
    /// Converts a creation request into parameters owned by `user_id`.
    ///
    /// # Returns
    /// - `Ok(CreateCharacterParams)` - Request is valid
    /// - `Err(AppError::BadRequest)` - Name is empty or blank
    pub fn from_dto(user_id: String, dto: CreateCharacterDto) -> Result<Self, AppError> {
        let name = dto.name.trim();
        if name.is_empty() {
            return Err(AppError::BadRequest("name not found".to_string()));
        }

        Ok(Self {
            user_id,
            name: name.to_string(),
            class_type: dto
                .class_type
                .map(|class_type| class_type.trim().to_string())
                .filter(|class_type| !class_type.is_empty()),
            stats_id: dto.stats_id,
        })
    }
}
