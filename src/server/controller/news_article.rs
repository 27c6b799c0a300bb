use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        news_article::{NewsArticleDto, NewsArticlePayloadDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::news_article::NewsArticleParams,
        service::news_article::NewsArticleService,
        state::AppState,
    },
};

/// Tag for grouping news article endpoints in OpenAPI documentation
pub static NEWS_ARTICLE_TAG: &str = "news-article";

#[derive(Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(rename_all = "camelCase", parameter_in = Query)]
pub struct NewsPaginationParams {
    /// Number of articles to skip, defaults to 0.
    pub first_result: Option<u64>,
    /// Maximum number of articles to return, unbounded when absent.
    pub max_results: Option<u64>,
}

/// List news articles ordered by ID.
///
/// Public endpoint.
#[utoipa::path(
    get,
    path = "/api/news-articles",
    tag = NEWS_ARTICLE_TAG,
    params(NewsPaginationParams),
    responses(
        (status = 200, description = "Page of news articles", body = Vec<NewsArticleDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_news_articles(
    State(state): State<AppState>,
    Query(pagination): Query<NewsPaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let articles = NewsArticleService::new(&state.db)
        .list(pagination.first_result, pagination.max_results)
        .await?;

    let dtos: Vec<NewsArticleDto> = articles.into_iter().map(|a| a.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    get,
    path = "/api/news-articles/{id}",
    tag = NEWS_ARTICLE_TAG,
    params(
        ("id" = i32, Path, description = "News article ID")
    ),
    responses(
        (status = 200, description = "News article", body = NewsArticleDto),
        (status = 404, description = "News article not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_news_article(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let article = NewsArticleService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(article.into_dto())))
}

/// Publish a news article.
///
/// # Access Control
/// - `Admin` - Only admins can publish articles
///
/// # Returns
/// - `201 Created` - Created article
/// - `400 Bad Request` - Missing title or contents, or a relative image URL
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not an admin
#[utoipa::path(
    post,
    path = "/api/news-articles",
    tag = NEWS_ARTICLE_TAG,
    request_body = NewsArticlePayloadDto,
    responses(
        (status = 201, description = "Successfully created news article", body = NewsArticleDto),
        (status = 400, description = "Invalid article data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_news_article(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<NewsArticlePayloadDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&session)
        .require(&[Permission::Admin])
        .await?;

    let params = NewsArticleParams::from_dto(payload)?;

    let article = NewsArticleService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(article.into_dto())))
}

/// Edit a news article.
///
/// Edits keep the article's `updatedAt` so corrections don't resurface it as new.
///
/// # Access Control
/// - `Admin` - Only admins can edit articles
#[utoipa::path(
    put,
    path = "/api/news-articles/{id}",
    tag = NEWS_ARTICLE_TAG,
    params(
        ("id" = i32, Path, description = "News article ID")
    ),
    request_body = NewsArticlePayloadDto,
    responses(
        (status = 200, description = "Updated news article", body = NewsArticleDto),
        (status = 400, description = "Invalid article data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "News article not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_news_article(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<NewsArticlePayloadDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&session)
        .require(&[Permission::Admin])
        .await?;

    let params = NewsArticleParams::from_dto(payload)?;

    let article = NewsArticleService::new(&state.db).update(id, params).await?;

    Ok((StatusCode::OK, Json(article.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/news-articles/{id}",
    tag = NEWS_ARTICLE_TAG,
    params(
        ("id" = i32, Path, description = "News article ID")
    ),
    responses(
        (status = 204, description = "News article deleted"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "News article not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_news_article(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&session)
        .require(&[Permission::Admin])
        .await?;

    NewsArticleService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
