//! Client for the Keycloak admin REST API.
//!
//! Every call first obtains a short-lived admin token through the password grant
//! of the admin realm, then talks to `/admin/realms/<realm>/users`.

use reqwest::{Response, StatusCode};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::server::{
    config::KeycloakConfig,
    error::{keycloak::KeycloakError, AppError},
    model::user::{CreateUserParams, KeycloakUser, UpdateUserParams},
};

#[derive(Deserialize)]
struct AdminTokenResponse {
    access_token: Option<String>,
}

#[derive(Serialize)]
struct NewUserRepresentation<'a> {
    username: &'a str,
    enabled: bool,
    credentials: [CredentialRepresentation<'a>; 1],
}

#[derive(Serialize)]
struct CredentialRepresentation<'a> {
    #[serde(rename = "type")]
    kind: &'a str,
    value: &'a str,
    temporary: bool,
}

pub struct KeycloakAdminService<'a> {
    http_client: &'a reqwest::Client,
    keycloak: &'a KeycloakConfig,
}

impl<'a> KeycloakAdminService<'a> {
    pub fn new(http_client: &'a reqwest::Client, keycloak: &'a KeycloakConfig) -> Self {
        Self {
            http_client,
            keycloak,
        }
    }

    /// Creates an enabled user with a permanent password.
    ///
    /// # Returns
    /// - `Ok(())` - User created
    /// - `Err(KeycloakError::Upstream)` - Keycloak refused, e.g. 409 for a taken username
    pub async fn create_user(&self, params: &CreateUserParams) -> Result<(), AppError> {
        let token = self.admin_token().await?;

        let body = NewUserRepresentation {
            username: &params.username,
            enabled: true,
            credentials: [CredentialRepresentation {
                kind: "password",
                value: &params.password,
                temporary: false,
            }],
        };

        let response = self
            .http_client
            .post(self.keycloak.admin_users_url())
            .bearer_auth(token)
            .json(&body)
            .send()
            .await?;

        check_status(response).await?;

        Ok(())
    }

    /// Fetches a user by ID.
    ///
    /// # Returns
    /// - `Ok(Some(KeycloakUser))` - User exists
    /// - `Ok(None)` - Keycloak answered 404
    pub async fn find_user(&self, user_id: &str) -> Result<Option<KeycloakUser>, AppError> {
        let token = self.admin_token().await?;

        let response = self
            .http_client
            .get(self.user_url(user_id)?)
            .bearer_auth(token)
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let user = check_status(response).await?.json::<KeycloakUser>().await?;

        Ok(Some(user))
    }

    /// Updates the given profile fields of a user.
    ///
    /// # Returns
    /// - `Ok(true)` - User updated
    /// - `Ok(false)` - Keycloak answered 404
    pub async fn update_user(
        &self,
        user_id: &str,
        params: &UpdateUserParams,
    ) -> Result<bool, AppError> {
        let token = self.admin_token().await?;

        let response = self
            .http_client
            .put(self.user_url(user_id)?)
            .bearer_auth(token)
            .json(params)
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(false);
        }

        check_status(response).await?;

        Ok(true)
    }

    /// Deletes a user.
    ///
    /// # Returns
    /// - `Ok(true)` - User deleted
    /// - `Ok(false)` - Keycloak answered 404
    pub async fn delete_user(&self, user_id: &str) -> Result<bool, AppError> {
        let token = self.admin_token().await?;

        let response = self
            .http_client
            .delete(self.user_url(user_id)?)
            .bearer_auth(token)
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(false);
        }

        check_status(response).await?;

        Ok(true)
    }

    async fn admin_token(&self) -> Result<String, AppError> {
        let admin = &self.keycloak.admin;

        let response = self
            .http_client
            .post(self.keycloak.admin_token_url())
            .form(&[
                ("grant_type", "password"),
                ("client_id", admin.client_id.as_str()),
                ("username", admin.username.as_str()),
                ("password", admin.password.as_str()),
            ])
            .send()
            .await?;

        let token = check_status(response)
            .await?
            .json::<AdminTokenResponse>()
            .await?;

        token
            .access_token
            .ok_or_else(|| KeycloakError::MissingAdminToken.into())
    }

    /// URL of a single user with the ID percent-encoded as one path segment.
    fn user_url(&self, user_id: &str) -> Result<Url, AppError> {
        let mut url = Url::parse(&self.keycloak.admin_users_url())
            .map_err(|e| AppError::InternalError(format!("Invalid Keycloak URL: {}", e)))?;

        url.path_segments_mut()
            .map_err(|_| AppError::InternalError("Keycloak URL cannot be a base".to_string()))?
            .push(user_id);

        Ok(url)
    }
}

/// Turns a non-success Keycloak response into `KeycloakError::Upstream`.
async fn check_status(response: Response) -> Result<Response, AppError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await?;

    Err(KeycloakError::upstream(status, &body).into())
}
