//! News article factory for creating test article entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test news articles with customizable fields.
pub struct NewsArticleFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    contents: String,
    image_url: Option<String>,
}

impl<'a> NewsArticleFactory<'a> {
    /// Creates a new NewsArticleFactory with a unique title and no image.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("Article {}", id),
            contents: format!("Contents of article {}", id),
            image_url: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn contents(mut self, contents: impl Into<String>) -> Self {
        self.contents = contents.into();
        self
    }

    pub fn image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    pub async fn build(self) -> Result<entity::news_article::Model, DbErr> {
        let now = Utc::now();
        entity::news_article::ActiveModel {
            title: ActiveValue::Set(self.title),
            contents: ActiveValue::Set(self.contents),
            image_url: ActiveValue::Set(self.image_url),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a news article with default values.
pub async fn create_news_article(
    db: &DatabaseConnection,
) -> Result<entity::news_article::Model, DbErr> {
    NewsArticleFactory::new(db).build().await
}
