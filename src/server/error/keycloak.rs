use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum KeycloakError {
    /// Keycloak answered an admin API call with a non-success status.
    ///
    /// The status is passed through to the client so validation failures such as
    /// a duplicate username reach the caller as they were reported.
    #[error("{reason}: {message}")]
    Upstream {
        /// Status returned by Keycloak
        status: StatusCode,
        /// Canonical reason phrase of `status`
        reason: String,
        /// `errorMessage` (or `error`) from the Keycloak response body
        message: String,
    },

    /// Keycloak did not return an access token for the admin account.
    #[error("Keycloak admin token response did not contain an access token")]
    MissingAdminToken,
}

impl KeycloakError {
    /// Builds an `Upstream` error from a Keycloak status and its response body.
    ///
    /// Keycloak reports failures either as `{"errorMessage": ..}` or as
    /// `{"error": .., "error_description": ..}`; an unreadable body falls back to
    /// the raw text.
    pub fn upstream(status: StatusCode, body: &str) -> Self {
        let parsed = serde_json::from_str::<serde_json::Value>(body).ok();
        let message = parsed
            .as_ref()
            .and_then(|value| {
                value
                    .get("errorMessage")
                    .or_else(|| value.get("error_description"))
                    .or_else(|| value.get("error"))
            })
            .and_then(|value| value.as_str())
            .map(str::to_string)
            .unwrap_or_else(|| body.trim().to_string());

        Self::Upstream {
            status,
            reason: status
                .canonical_reason()
                .unwrap_or("Unknown status")
                .to_string(),
            message,
        }
    }
}

impl IntoResponse for KeycloakError {
    fn into_response(self) -> Response {
        match self {
            Self::Upstream { status, .. } => {
                tracing::warn!("Keycloak request failed: {}", self);
                let message = self.to_string();
                error_response(status, message)
            }
            err => super::InternalServerError(err).into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_error_message_from_body() {
        let err = KeycloakError::upstream(
            StatusCode::CONFLICT,
            r#"{"errorMessage":"User exists with same username"}"#,
        );

        assert_eq!(err.to_string(), "Conflict: User exists with same username");
    }

    #[test]
    fn falls_back_to_oauth_error_fields() {
        let err = KeycloakError::upstream(
            StatusCode::UNAUTHORIZED,
            r#"{"error":"invalid_grant","error_description":"Invalid user credentials"}"#,
        );

        assert_eq!(err.to_string(), "Unauthorized: Invalid user credentials");
    }

    #[test]
    fn falls_back_to_raw_body() {
        let err = KeycloakError::upstream(StatusCode::BAD_GATEWAY, "upstream down\n");

        assert_eq!(err.to_string(), "Bad Gateway: upstream down");
    }
}
