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
        character::{CharacterDto, CreateCharacterDto},
    },
    server::{
        error::AppError,
        middleware::auth::{authorize, AuthGuard, Permission},
        model::character::CreateCharacterParams,
        service::character::CharacterService,
        state::AppState,
    },
};

/// Tag for grouping character endpoints in OpenAPI documentation
pub static CHARACTER_TAG: &str = "character";

/// Create a character for the logged-in user.
///
/// # Access Control
/// - Any logged-in user; the character is owned by them
///
/// # Returns
/// - `201 Created` - Created character
/// - `400 Bad Request` - Name missing or blank
/// - `401 Unauthorized` - User not authenticated
/// - `404 Not Found` - `statsId` references no stat
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/characters",
    tag = CHARACTER_TAG,
    request_body = CreateCharacterDto,
    responses(
        (status = 201, description = "Successfully created character", body = CharacterDto),
        (status = 400, description = "Invalid character data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Stats not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_character(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateCharacterDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&session).require(&[]).await?;

    let params = CreateCharacterParams::from_dto(user.id, payload)?;

    let character = CharacterService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(character.into_dto())))
}

/// Get all characters of a user.
///
/// # Access Control
/// - `UserOrAdmin` - The user themselves or an admin
#[utoipa::path(
    get,
    path = "/api/users/{user_id}/characters",
    tag = CHARACTER_TAG,
    params(
        ("user_id" = String, Path, description = "Keycloak user ID")
    ),
    responses(
        (status = 200, description = "Characters of the user", body = Vec<CharacterDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not the user and not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_characters(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&session)
        .require(&[Permission::UserOrAdmin(user_id.clone())])
        .await?;

    let characters = CharacterService::new(&state.db)
        .get_by_user_id(&user_id)
        .await?;

    let dtos: Vec<CharacterDto> = characters.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get a character by ID.
///
/// The character is loaded before the ownership check, so a missing character
/// yields 404 for any logged-in user.
///
/// # Access Control
/// - `UserOrAdmin` - The owner of the character or an admin
#[utoipa::path(
    get,
    path = "/api/characters/{character_id}",
    tag = CHARACTER_TAG,
    params(
        ("character_id" = Uuid, Path, description = "Character ID")
    ),
    responses(
        (status = 200, description = "Character", body = CharacterDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not the owner and not an admin", body = ErrorDto),
        (status = 404, description = "Character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_character(
    State(state): State<AppState>,
    session: Session,
    Path(character_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&session).require(&[]).await?;

    let character = CharacterService::new(&state.db)
        .get_by_id(character_id)
        .await?;

    authorize(&user, &[Permission::UserOrAdmin(character.user_id.clone())])?;

    Ok((StatusCode::OK, Json(character.into_dto())))
}

/// Delete a character.
///
/// # Access Control
/// - `UserOrAdmin` - The owner of the character or an admin
///
/// # Returns
/// - `204 No Content` - Character deleted
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - Not the owner and not an admin
/// - `404 Not Found` - Character not found
#[utoipa::path(
    delete,
    path = "/api/characters/{character_id}",
    tag = CHARACTER_TAG,
    params(
        ("character_id" = Uuid, Path, description = "Character ID")
    ),
    responses(
        (status = 204, description = "Character deleted"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not the owner and not an admin", body = ErrorDto),
        (status = 404, description = "Character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_character(
    State(state): State<AppState>,
    session: Session,
    Path(character_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&session).require(&[]).await?;

    let character_service = CharacterService::new(&state.db);
    let character = character_service.get_by_id(character_id).await?;

    authorize(&user, &[Permission::UserOrAdmin(character.user_id)])?;

    character_service.delete(character_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
