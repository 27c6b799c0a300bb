use chrono::{DateTime, Utc};
use url::Url;

use crate::{
    model::news_article::{NewsArticleDto, NewsArticlePayloadDto},
    server::{error::AppError, util::time::truncate_to_seconds},
};

#[derive(Debug, Clone, PartialEq)]
pub struct NewsArticle {
    pub id: i32,
    pub title: String,
    pub contents: String,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewsArticle {
    pub fn from_entity(entity: entity::news_article::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            contents: entity.contents,
            image_url: entity.image_url,
            created_at: truncate_to_seconds(entity.created_at),
            updated_at: truncate_to_seconds(entity.updated_at),
        }
    }

    pub fn into_dto(self) -> NewsArticleDto {
        NewsArticleDto {
            id: self.id,
            title: self.title,
            contents: self.contents,
            image_url: self.image_url,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Validated article fields used for both creation and update.
#[derive(Debug, Clone, PartialEq)]
pub struct NewsArticleParams {
    pub title: String,
    pub contents: String,
    pub image_url: Option<String>,
}

impl NewsArticleParams {
    /// Validates an article payload.
    ///
    /// # Returns
    /// - `Ok(NewsArticleParams)` - Title and contents present, image URL absent or absolute
    /// - `Err(AppError::BadRequest)` - Blank title or contents, or a relative/invalid image URL
    pub fn from_dto(dto: NewsArticlePayloadDto) -> Result<Self, AppError> {
        let title = dto.title.trim();
        if title.is_empty() {
            return Err(AppError::BadRequest("title not found".to_string()));
        }

        if dto.contents.trim().is_empty() {
            return Err(AppError::BadRequest("contents not found".to_string()));
        }

        let image_url = match dto.image_url.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => {
                // Url::parse only accepts absolute URLs
                let url = Url::parse(raw)
                    .map_err(|_| AppError::BadRequest("imageUrl must be a valid URL".to_string()))?;
                Some(url.to_string())
            }
        };

        Ok(Self {
            title: title.to_string(),
            contents: dto.contents,
            image_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(title: &str, image_url: Option<&str>) -> NewsArticlePayloadDto {
        NewsArticlePayloadDto {
            title: title.to_string(),
            contents: "Patch notes".to_string(),
            image_url: image_url.map(str::to_string),
        }
    }

    #[test]
    fn accepts_absolute_image_url() {
        let params =
            NewsArticleParams::from_dto(payload("Season 2", Some("https://cdn.example.com/a.png")))
                .unwrap();

        assert_eq!(params.title, "Season 2");
        assert_eq!(
            params.image_url.as_deref(),
            Some("https://cdn.example.com/a.png")
        );
    }

    #[test]
    fn rejects_relative_image_url() {
        let result = NewsArticleParams::from_dto(payload("Season 2", Some("/images/a.png")));

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[test]
    fn rejects_blank_title() {
        let result = NewsArticleParams::from_dto(payload(" ", None));

        assert!(matches!(result, Err(AppError::BadRequest(msg)) if msg == "title not found"));
    }

    #[test]
    fn blank_image_url_is_none() {
        let params = NewsArticleParams::from_dto(payload("Season 2", Some(""))).unwrap();

        assert_eq!(params.image_url, None);
    }
}
