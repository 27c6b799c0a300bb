use sea_orm::DatabaseConnection;

use crate::server::{
    data::news_article::NewsArticleRepository,
    error::AppError,
    model::news_article::{NewsArticle, NewsArticleParams},
};

pub struct NewsArticleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NewsArticleService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: NewsArticleParams) -> Result<NewsArticle, AppError> {
        let repo = NewsArticleRepository::new(self.db);

        Ok(repo.create(params).await?)
    }

    /// Lists articles ordered by ID.
    ///
    /// # Arguments
    /// - `first_result` - Number of articles to skip, `None` for none
    /// - `max_results` - Maximum number of articles, `None` for all
    pub async fn list(
        &self,
        first_result: Option<u64>,
        max_results: Option<u64>,
    ) -> Result<Vec<NewsArticle>, AppError> {
        let repo = NewsArticleRepository::new(self.db);

        Ok(repo
            .get_paginated(first_result.unwrap_or(0), max_results)
            .await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<NewsArticle, AppError> {
        let repo = NewsArticleRepository::new(self.db);

        repo.get_by_id(id).await?.ok_or_else(article_not_found)
    }

    /// Updates an article while keeping its last update time.
    ///
    /// Corrections to an article should not make it look freshly published.
    pub async fn update(&self, id: i32, params: NewsArticleParams) -> Result<NewsArticle, AppError> {
        let repo = NewsArticleRepository::new(self.db);

        repo.update_silently(id, params)
            .await?
            .ok_or_else(article_not_found)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = NewsArticleRepository::new(self.db);

        if !repo.delete(id).await? {
            return Err(article_not_found());
        }

        Ok(())
    }
}

fn article_not_found() -> AppError {
    AppError::NotFound("news article not found".to_string())
}
