use oauth2::{AuthorizationCode, TokenResponse};
use serde::Deserialize;

use crate::server::{
    error::{auth::AuthError, keycloak::KeycloakError, AppError},
    model::user::SessionUser,
    service::auth::KeycloakAuthService,
};

/// Subset of the Keycloak token introspection response.
#[derive(Deserialize)]
struct IntrospectionResponse {
    #[serde(default)]
    active: bool,
    sub: Option<String>,
    username: Option<String>,
    preferred_username: Option<String>,
    #[serde(default)]
    realm_access: RealmAccess,
}

#[derive(Deserialize, Default)]
struct RealmAccess {
    #[serde(default)]
    roles: Vec<String>,
}

impl<'a> KeycloakAuthService<'a> {
    /// Exchanges an authorization code and resolves the user it belongs to.
    ///
    /// # Returns
    /// - `Ok(SessionUser)` - User to store in the session
    /// - `Err(AuthError::TokenExchange)` - Keycloak rejected the code
    /// - `Err(AuthError::InactiveToken)` - Issued token is not active
    pub async fn callback(&self, authorization_code: String) -> Result<SessionUser, AppError> {
        let auth_code = AuthorizationCode::new(authorization_code);

        let token = self
            .oauth_client
            .exchange_code(auth_code)
            .request_async(self.http_client)
            .await
            .map_err(|e| AuthError::TokenExchange(e.to_string()))?;

        self.introspect(token.access_token().secret()).await
    }

    /// Asks Keycloak who an access token belongs to.
    ///
    /// # Returns
    /// - `Ok(SessionUser)` - Subject, username and realm roles of the token
    /// - `Err(AuthError::InactiveToken)` - Token expired or revoked
    /// - `Err(KeycloakError::Upstream)` - Introspection endpoint rejected the request
    pub async fn introspect(&self, access_token: &str) -> Result<SessionUser, AppError> {
        let response = self
            .http_client
            .post(self.keycloak.introspection_url())
            .form(&[
                ("token", access_token),
                ("client_id", self.keycloak.client_id.as_str()),
                ("client_secret", self.keycloak.client_secret.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            return Err(KeycloakError::upstream(status, &body).into());
        }

        let introspection = response.json::<IntrospectionResponse>().await?;

        if !introspection.active {
            return Err(AuthError::InactiveToken.into());
        }

        let Some(id) = introspection.sub else {
            return Err(AppError::InternalError(
                "Keycloak introspection response has no subject".to_string(),
            ));
        };

        Ok(SessionUser {
            username: introspection
                .preferred_username
                .or(introspection.username)
                .unwrap_or_else(|| id.clone()),
            id,
            roles: introspection.realm_access.roles,
        })
    }
}
