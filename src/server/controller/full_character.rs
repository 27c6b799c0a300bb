use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, character::FullCharacterDto},
    server::{
        error::AppError, middleware::auth::AuthGuard, service::character::CharacterService,
        state::AppState,
    },
};

/// Tag for grouping full character endpoints in OpenAPI documentation
pub static FULL_CHARACTER_TAG: &str = "full-character";

/// Get the logged-in user's characters joined with their stats.
///
/// Characters without stats are left out.
#[utoipa::path(
    get,
    path = "/api/full-characters",
    tag = FULL_CHARACTER_TAG,
    responses(
        (status = 200, description = "Characters with level and experience", body = Vec<FullCharacterDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_full_characters(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&session).require(&[]).await?;

    let characters = CharacterService::new(&state.db)
        .get_full_by_user_id(&user.id)
        .await?;

    let dtos: Vec<FullCharacterDto> = characters.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}
