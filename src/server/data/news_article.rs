use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder, QuerySelect,
};

use crate::server::{
    model::news_article::{NewsArticle, NewsArticleParams},
    util::time,
};

/// Largest LIMIT SQLite accepts, standing in for "no limit" when an offset is set.
const UNBOUNDED_LIMIT: u64 = i64::MAX as u64;

pub struct NewsArticleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NewsArticleRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: NewsArticleParams) -> Result<NewsArticle, DbErr> {
        let now = time::now();

        let article = entity::news_article::ActiveModel {
            title: ActiveValue::Set(params.title),
            contents: ActiveValue::Set(params.contents),
            image_url: ActiveValue::Set(params.image_url),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(NewsArticle::from_entity(article))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<NewsArticle>, DbErr> {
        let article = entity::prelude::NewsArticle::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(article.map(NewsArticle::from_entity))
    }

    /// Lists articles ordered by ID.
    ///
    /// # Arguments
    /// - `first_result` - Number of articles to skip
    /// - `max_results` - Maximum number of articles to return, `None` for all
    pub async fn get_paginated(
        &self,
        first_result: u64,
        max_results: Option<u64>,
    ) -> Result<Vec<NewsArticle>, DbErr> {
        let mut query =
            entity::prelude::NewsArticle::find().order_by_asc(entity::news_article::Column::Id);

        // SQLite rejects OFFSET without LIMIT
        match (first_result, max_results) {
            (0, None) => {}
            (0, Some(max)) => query = query.limit(max),
            (first, max) => {
                query = query
                    .offset(first)
                    .limit(max.unwrap_or(UNBOUNDED_LIMIT));
            }
        }

        let articles = query.all(self.db).await?;

        Ok(articles.into_iter().map(NewsArticle::from_entity).collect())
    }

    /// Replaces the fields of an article without touching `updated_at`.
    ///
    /// # Returns
    /// - `Ok(Some(NewsArticle))` - Updated article
    /// - `Ok(None)` - No article with that ID
    /// - `Err(DbErr)` - Database error
    pub async fn update_silently(
        &self,
        id: i32,
        params: NewsArticleParams,
    ) -> Result<Option<NewsArticle>, DbErr> {
        let Some(article) = entity::prelude::NewsArticle::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::news_article::ActiveModel = article.into();
        active_model.title = ActiveValue::Set(params.title);
        active_model.contents = ActiveValue::Set(params.contents);
        active_model.image_url = ActiveValue::Set(params.image_url);

        let article = active_model.update(self.db).await?;

        Ok(Some(NewsArticle::from_entity(article)))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::NewsArticle::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
