use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;
use uuid::Uuid;

use crate::{
    model::{
        api::ErrorDto,
        stat::{StatDto, StatValuesDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, model::stat::StatParams,
        service::stat::StatService, state::AppState,
    },
};

/// Tag for grouping stat endpoints in OpenAPI documentation
pub static STAT_TAG: &str = "stat";

/// Create a stat.
///
/// # Returns
/// - `201 Created` - Created stat
/// - `400 Bad Request` - Level below 1 or negative experience
/// - `401 Unauthorized` - User not authenticated
#[utoipa::path(
    post,
    path = "/api/stats",
    tag = STAT_TAG,
    request_body = StatValuesDto,
    responses(
        (status = 201, description = "Successfully created stat", body = StatDto),
        (status = 400, description = "Invalid stat values", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_stat(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<StatValuesDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&session).require(&[]).await?;

    let params = StatParams::from_dto(payload)?;

    let stat = StatService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(stat.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/stats/{stat_id}",
    tag = STAT_TAG,
    params(
        ("stat_id" = Uuid, Path, description = "Stat ID")
    ),
    responses(
        (status = 200, description = "Stat", body = StatDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Stat not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_stat(
    State(state): State<AppState>,
    session: Session,
    Path(stat_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&session).require(&[]).await?;

    let stat = StatService::new(&state.db).get_by_id(stat_id).await?;

    Ok((StatusCode::OK, Json(stat.into_dto())))
}

/// Replace level and experience of a stat.
#[utoipa::path(
    put,
    path = "/api/stats/{stat_id}",
    tag = STAT_TAG,
    params(
        ("stat_id" = Uuid, Path, description = "Stat ID")
    ),
    request_body = StatValuesDto,
    responses(
        (status = 200, description = "Updated stat", body = StatDto),
        (status = 400, description = "Invalid stat values", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Stat not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_stat(
    State(state): State<AppState>,
    session: Session,
    Path(stat_id): Path<Uuid>,
    Json(payload): Json<StatValuesDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&session).require(&[]).await?;

    let params = StatParams::from_dto(payload)?;

    let stat = StatService::new(&state.db).update(stat_id, params).await?;

    Ok((StatusCode::OK, Json(stat.into_dto())))
}

/// Delete a stat.
///
/// Characters referencing the stat keep existing without stats.
#[utoipa::path(
    delete,
    path = "/api/stats/{stat_id}",
    tag = STAT_TAG,
    params(
        ("stat_id" = Uuid, Path, description = "Stat ID")
    ),
    responses(
        (status = 204, description = "Stat deleted"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Stat not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_stat(
    State(state): State<AppState>,
    session: Session,
    Path(stat_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&session).require(&[]).await?;

    StatService::new(&state.db).delete(stat_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
