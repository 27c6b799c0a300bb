use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    model::stat::{StatDto, StatValuesDto},
    server::{error::AppError, util::time::truncate_to_seconds},
};

/// Level and experience of a character.
#[derive(Debug, Clone, PartialEq)]
pub struct Stat {
    pub id: Uuid,
    pub level: i32,
    pub experience: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Stat {
    pub fn from_entity(entity: entity::stat::Model) -> Self {
        Self {
            id: entity.id,
            level: entity.level,
            experience: entity.experience,
            created_at: truncate_to_seconds(entity.created_at),
            updated_at: truncate_to_seconds(entity.updated_at),
        }
    }

    pub fn into_dto(self) -> StatDto {
        StatDto {
            id: self.id,
            level: self.level,
            experience: self.experience,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Validated stat values for creating or updating a stat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatParams {
    pub level: i32,
    pub experience: i64,
}

impl StatParams {
    /// Validates a request body.
    ///
    /// # Returns
    /// - `Ok(StatParams)` - Level is at least 1 and experience is not negative
    /// - `Err(AppError::BadRequest("level not found"))` - Level missing or below 1
    /// - `Err(AppError::BadRequest("experience not found"))` - Experience missing or negative
    pub fn from_dto(dto: StatValuesDto) -> Result<Self, AppError> {
        let level = dto
            .level
            .filter(|level| *level >= 1)
            .ok_or_else(|| AppError::BadRequest("level not found".to_string()))?;
        let experience = dto
            .experience
            .filter(|experience| *experience >= 0)
            .ok_or_else(|| AppError::BadRequest("experience not found".to_string()))?;

        Ok(Self { level, experience })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validate(level: Option<i32>, experience: Option<i64>) -> Result<StatParams, AppError> {
        StatParams::from_dto(StatValuesDto { level, experience })
    }

    #[test]
    fn accepts_minimal_values() {
        assert_eq!(
            validate(Some(1), Some(0)).unwrap(),
            StatParams {
                level: 1,
                experience: 0
            }
        );
    }

    #[test]
    fn rejects_missing_or_low_level() {
        for level in [None, Some(0), Some(-3)] {
            let result = validate(level, Some(10));
            assert!(matches!(result, Err(AppError::BadRequest(msg)) if msg == "level not found"));
        }
    }

    #[test]
    fn rejects_missing_or_negative_experience() {
        for experience in [None, Some(-1)] {
            let result = validate(Some(2), experience);
            assert!(
                matches!(result, Err(AppError::BadRequest(msg)) if msg == "experience not found")
            );
        }
    }
}
