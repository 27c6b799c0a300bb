use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CharacterDto {
    pub id: Uuid,
    /// Keycloak ID of the owning user.
    pub user_id: String,
    pub name: String,
    pub class_type: Option<String>,
    pub stats_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCharacterDto {
    #[serde(default)]
    pub name: String,
    pub class_type: Option<String>,
    pub stats_id: Option<Uuid>,
}

/// Character joined with its stats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FullCharacterDto {
    pub id: Uuid,
    pub name: String,
    pub class_type: Option<String>,
    pub level: i32,
    pub experience: i64,
    /// Last update of the character's stats.
    pub updated_at: DateTime<Utc>,
}
