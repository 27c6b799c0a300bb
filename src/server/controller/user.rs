use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        user::{CreateUserDto, UpdateUserDto, UserDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::user::{CreateUserParams, UpdateUserParams},
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Register a new user in Keycloak.
///
/// Public endpoint.
///
/// # Returns
/// - `201 Created` - User registered
/// - `400 Bad Request` - Username or password missing
/// - Keycloak error status - Keycloak refused the registration (e.g. `409` for a taken username)
#[utoipa::path(
    post,
    path = "/api/user",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "User registered", body = MessageDto),
        (status = 400, description = "Username or password missing", body = ErrorDto),
        (status = 409, description = "Username already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateUserParams::from_dto(payload)?;

    UserService::new(&state.http_client, &state.keycloak)
        .register(params)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageDto::new("user created succesfully!")),
    ))
}

/// Update the profile of the logged-in user.
///
/// Only fields present in the body are changed.
///
/// # Returns
/// - `200 OK` - Profile updated
/// - `400 Bad Request` - Body contains none of the profile fields
/// - `401 Unauthorized` - User not authenticated
/// - `404 Not Found` - User no longer exists in Keycloak
#[utoipa::path(
    put,
    path = "/api/user",
    tag = USER_TAG,
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "Profile updated", body = MessageDto),
        (status = 400, description = "Invalid request body", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<UpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&session).require(&[]).await?;

    let params = UpdateUserParams::from_dto(payload)?;

    UserService::new(&state.http_client, &state.keycloak)
        .update(&user.id, params)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("user updated succesfully!")),
    ))
}

/// Get a user from Keycloak.
///
/// # Access Control
/// - `UserOrAdmin` - The user themselves or an admin
#[utoipa::path(
    get,
    path = "/api/user/{user_id}",
    tag = USER_TAG,
    params(
        ("user_id" = String, Path, description = "Keycloak user ID")
    ),
    responses(
        (status = 200, description = "User", body = UserDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not the user and not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&session)
        .require(&[Permission::UserOrAdmin(user_id.clone())])
        .await?;

    let user = UserService::new(&state.http_client, &state.keycloak)
        .get_by_id(&user_id)
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Delete a user from Keycloak.
///
/// # Access Control
/// - `Admin` - Only admins can delete users
#[utoipa::path(
    delete,
    path = "/api/user/{user_id}",
    tag = USER_TAG,
    params(
        ("user_id" = String, Path, description = "Keycloak user ID")
    ),
    responses(
        (status = 204, description = "User deleted"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&session)
        .require(&[Permission::Admin])
        .await?;

    UserService::new(&state.http_client, &state.keycloak)
        .delete(&user_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
