use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewsArticleDto {
    pub id: i32,
    pub title: String,
    pub contents: String,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewsArticlePayloadDto {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub contents: String,
    /// Absolute URL of the article's cover image.
    pub image_url: Option<String>,
}
