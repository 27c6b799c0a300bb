use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;
use utoipa::IntoParams;

use crate::{
    model::{api::ErrorDto, user::AuthUserDto},
    server::{
        error::{auth::AuthError, AppError},
        middleware::{
            auth::AuthGuard,
            session::{AuthSession, CsrfSession},
        },
        service::auth::KeycloakAuthService,
        state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Query parameters for the OAuth callback endpoint.
#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CallbackParams {
    /// CSRF state token to be validated against the session value.
    pub state: String,
    /// Authorization code from Keycloak for token exchange.
    pub code: String,
}

/// Redirect to the Keycloak login page.
///
/// Stores a fresh CSRF token in the session; the callback only accepts a state
/// matching it.
#[utoipa::path(
    get,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Redirect to the Keycloak login page"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let auth_service =
        KeycloakAuthService::new(&state.http_client, &state.oauth_client, &state.keycloak);

    let (url, csrf_token) = auth_service.login_url();

    CsrfSession::new(&session)
        .set_token(csrf_token.secret().clone())
        .await?;

    Ok(Redirect::temporary(url.as_str()))
}

/// Complete the Keycloak login.
///
/// Validates the CSRF state, exchanges the authorization code and stores the
/// resolved user in the session.
///
/// # Returns
/// - `200 OK` - Logged-in user
/// - `400 Bad Request` - CSRF mismatch or rejected authorization code
/// - `401 Unauthorized` - Keycloak issued an inactive token
/// - `500 Internal Server Error` - Keycloak or session failure
#[utoipa::path(
    get,
    path = "/api/auth/callback",
    tag = AUTH_TAG,
    params(CallbackParams),
    responses(
        (status = 200, description = "Logged-in user", body = AuthUserDto),
        (status = 400, description = "Login failed", body = ErrorDto),
        (status = 401, description = "Token not active", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn callback(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<CallbackParams>,
) -> Result<impl IntoResponse, AppError> {
    validate_csrf(&session, &params.state).await?;

    let auth_service =
        KeycloakAuthService::new(&state.http_client, &state.oauth_client, &state.keycloak);

    let user = auth_service.callback(params.code).await?;

    // Prevent session fixation across the login boundary
    session.cycle_id().await?;
    AuthSession::new(&session).set_user(&user).await?;

    tracing::info!("User {} logged in", user.username);

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Log out the current user.
#[utoipa::path(
    get,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 204, description = "Session cleared")
    ),
)]
pub async fn logout(session: Session) -> impl IntoResponse {
    AuthSession::new(&session).clear().await;

    StatusCode::NO_CONTENT
}

/// Get the logged-in user.
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Logged-in user", body = AuthUserDto),
        (status = 401, description = "User not authenticated", body = ErrorDto)
    ),
)]
pub async fn get_user(session: Session) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&session).require(&[]).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

async fn validate_csrf(session: &Session, csrf_state: &str) -> Result<(), AppError> {
    let stored_state = CsrfSession::new(session).take_token().await?;

    if let Some(state) = stored_state {
        if state == csrf_state {
            return Ok(());
        }
    }

    Err(AppError::AuthErr(AuthError::CsrfValidationFailed))
}
