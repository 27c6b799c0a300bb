use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No authenticated user stored in the session.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("User not found in session")]
    UserNotInSession,

    /// The session user lacks the permission an endpoint requires.
    ///
    /// Results in a 403 Forbidden response. The reason is only logged.
    ///
    /// # Fields
    /// - Keycloak ID of the user who was denied
    /// - Reason for the denial
    #[error("User {0} denied access: {1}")]
    AccessDenied(String, String),

    /// CSRF state validation failed during OAuth callback.
    ///
    /// The CSRF state token in the OAuth callback URL does not match the token stored
    /// in the session, indicating a potential CSRF attack or an invalid callback request.
    /// Results in a 400 Bad Request response.
    #[error("Failed to login user due to CSRF state mismatch")]
    CsrfValidationFailed,

    /// Keycloak rejected the authorization code exchange.
    ///
    /// Results in a 400 Bad Request response asking the user to log in again.
    #[error("Failed to exchange authorization code: {0}")]
    TokenExchange(String),

    /// Introspection reported the freshly issued access token as inactive.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Access token returned by Keycloak is not active")]
    InactiveToken,
}

/// Converts authentication errors into HTTP responses.
///
/// - `UserNotInSession` / `InactiveToken` → 401 Unauthorized
/// - `AccessDenied` → 403 Forbidden
/// - `CsrfValidationFailed` / `TokenExchange` → 400 Bad Request with "There was an issue logging you in"
///
/// All errors are logged at debug level for diagnostics while keeping client-facing messages
/// generic to avoid information leakage.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::UserNotInSession | Self::InactiveToken => {
                error_response(StatusCode::UNAUTHORIZED, "Unauthorized")
            }
            Self::AccessDenied(_, _) => error_response(StatusCode::FORBIDDEN, "Forbidden"),
            Self::CsrfValidationFailed | Self::TokenExchange(_) => error_response(
                StatusCode::BAD_REQUEST,
                "There was an issue logging you in, please try again.",
            ),
        }
    }
}
