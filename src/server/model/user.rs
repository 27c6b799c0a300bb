//! User domain models and parameters.
//!
//! Users live in Keycloak; the application only keeps the logged-in user in the
//! session and talks to the Keycloak admin API for everything else.

use serde::{Deserialize, Serialize};

use crate::{
    model::user::{AuthUserDto, CreateUserDto, UpdateUserDto, UserDto},
    server::error::AppError,
};

/// Realm role granting admin permissions.
pub const ADMIN_ROLE: &str = "admin";

/// Authenticated user kept in the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    /// Keycloak subject (user ID).
    pub id: String,
    pub username: String,
    /// Realm roles at login time.
    pub roles: Vec<String>,
}

impl SessionUser {
    pub fn is_admin(&self) -> bool {
        self.roles.iter().any(|role| role == ADMIN_ROLE)
    }

    pub fn into_dto(self) -> AuthUserDto {
        AuthUserDto {
            id: self.id,
            username: self.username,
            roles: self.roles,
        }
    }
}

/// User representation as returned by the Keycloak admin API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeycloakUser {
    pub id: String,
    pub username: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    #[serde(default)]
    pub enabled: bool,
    pub created_timestamp: Option<i64>,
}

impl KeycloakUser {
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            enabled: self.enabled,
            created_timestamp: self.created_timestamp,
        }
    }
}

/// Validated registration data.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateUserParams {
    pub username: String,
    pub password: String,
}

impl CreateUserParams {
    /// # Returns
    /// - `Ok(CreateUserParams)` - Username and password are present
    /// - `Err(AppError::BadRequest)` - Either field is missing or blank
    pub fn from_dto(dto: CreateUserDto) -> Result<Self, AppError> {
        let username = dto
            .username
            .map(|username| username.trim().to_string())
            .filter(|username| !username.is_empty())
            .ok_or_else(|| AppError::BadRequest("username not found".to_string()))?;
        let password = dto
            .password
            .filter(|password| !password.is_empty())
            .ok_or_else(|| AppError::BadRequest("password not found".to_string()))?;

        Ok(Self { username, password })
    }
}

/// Profile fields to change; absent fields are left untouched in Keycloak.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl UpdateUserParams {
    /// # Returns
    /// - `Ok(UpdateUserParams)` - At least one field is present
    /// - `Err(AppError::BadRequest("invalid request body!"))` - Every field is absent
    pub fn from_dto(dto: UpdateUserDto) -> Result<Self, AppError> {
        if dto.first_name.is_none() && dto.last_name.is_none() && dto.email.is_none() {
            return Err(AppError::BadRequest("invalid request body!".to_string()));
        }

        Ok(Self {
            first_name: dto.first_name,
            last_name: dto.last_name,
            email: dto.email,
        })
    }
}
