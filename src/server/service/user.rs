//! User service for business logic.
//!
//! This module provides the `UserService` for managing Keycloak users. It turns
//! missing users into `NotFound` errors and keeps the admin API client out of the
//! controllers.

use crate::server::{
    config::KeycloakConfig,
    error::AppError,
    model::user::{CreateUserParams, KeycloakUser, UpdateUserParams},
    service::keycloak::KeycloakAdminService,
};

pub struct UserService<'a> {
    admin: KeycloakAdminService<'a>,
}

impl<'a> UserService<'a> {
    pub fn new(http_client: &'a reqwest::Client, keycloak: &'a KeycloakConfig) -> Self {
        Self {
            admin: KeycloakAdminService::new(http_client, keycloak),
        }
    }

    /// Registers a new user.
    ///
    /// # Arguments
    /// - `params` - Validated username and password
    ///
    /// # Returns
    /// - `Ok(())` - User created in Keycloak
    /// - `Err(AppError::KeycloakErr)` - Keycloak refused the registration
    pub async fn register(&self, params: CreateUserParams) -> Result<(), AppError> {
        self.admin.create_user(&params).await?;

        tracing::info!("Registered user {}", params.username);

        Ok(())
    }

    /// Retrieves a user by their Keycloak ID.
    ///
    /// # Returns
    /// - `Ok(KeycloakUser)` - User found
    /// - `Err(AppError::NotFound)` - Keycloak has no such user
    pub async fn get_by_id(&self, user_id: &str) -> Result<KeycloakUser, AppError> {
        self.admin
            .find_user(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("user not found".to_string()))
    }

    /// Updates the profile of a user.
    ///
    /// # Returns
    /// - `Ok(())` - User updated
    /// - `Err(AppError::NotFound)` - Keycloak has no such user
    pub async fn update(&self, user_id: &str, params: UpdateUserParams) -> Result<(), AppError> {
        if !self.admin.update_user(user_id, &params).await? {
            return Err(AppError::NotFound("user not found".to_string()));
        }

        Ok(())
    }

    /// Deletes a user.
    ///
    /// # Returns
    /// - `Ok(())` - User deleted
    /// - `Err(AppError::NotFound)` - Keycloak has no such user
    pub async fn delete(&self, user_id: &str) -> Result<(), AppError> {
        if !self.admin.delete_user(user_id).await? {
            return Err(AppError::NotFound("user not found".to_string()));
        }

        tracing::info!("Deleted user {}", user_id);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::service::fake_keycloak::FakeKeycloak;
    use axum::{
        http::StatusCode,
        routing::{post, put},
        Json, Router,
    };
    use serde_json::json;

    async fn fake_keycloak() -> FakeKeycloak {
        let router = Router::new()
            .route(
                "/realms/master/protocol/openid-connect/token",
                post(|| async { Json(json!({ "access_token": "admin-token" })) }),
            )
            .route(
                "/admin/realms/test/users/{id}",
                put(|| async { StatusCode::NOT_FOUND })
                    .get(|| async { StatusCode::NOT_FOUND })
                    .delete(|| async { StatusCode::NOT_FOUND }),
            );

        FakeKeycloak::spawn(router).await
    }

    #[tokio::test]
    async fn missing_user_is_not_found() {
        let keycloak = fake_keycloak().await;
        let config = keycloak.config();
        let http_client = reqwest::Client::new();

        let service = UserService::new(&http_client, &config);

        assert!(matches!(
            service.get_by_id("ghost").await,
            Err(AppError::NotFound(msg)) if msg == "user not found"
        ));
        assert!(matches!(
            service.delete("ghost").await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            service
                .update(
                    "ghost",
                    UpdateUserParams {
                        first_name: Some("Casper".to_string()),
                        last_name: None,
                        email: None,
                    },
                )
                .await,
            Err(AppError::NotFound(_))
        ));
    }
}
