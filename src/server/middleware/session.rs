//! Type-safe session management wrappers.
//!
//! Each struct wraps the same underlying `Session` but exposes only the methods
//! relevant to its concern, keeping session keys and value types in one place.

use tower_sessions::Session;

use crate::server::{error::AppError, model::user::SessionUser};

// Session key constants
const SESSION_AUTH_USER: &str = "auth:user";
const SESSION_AUTH_CSRF_TOKEN: &str = "auth:csrf_token";

/// Authentication session management.
///
/// Stores the user resolved from Keycloak at login for the lifetime of the session.
pub struct AuthSession<'a> {
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the logged-in user in the session.
    ///
    /// Called after a successful OAuth callback to establish a logged-in session.
    ///
    /// # Returns
    /// - `Ok(())` - User successfully stored
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    pub async fn set_user(&self, user: &SessionUser) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_USER, user).await?;
        Ok(())
    }

    /// Retrieves the logged-in user from the session.
    ///
    /// # Returns
    /// - `Ok(Some(user))` - User is logged in
    /// - `Ok(None)` - No user in session (not logged in)
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn get_user(&self) -> Result<Option<SessionUser>, AppError> {
        Ok(self.session.get::<SessionUser>(SESSION_AUTH_USER).await?)
    }

    /// Removes all data from the session, logging the user out.
    pub async fn clear(&self) {
        self.session.clear().await;
    }
}

/// CSRF protection session management.
///
/// Tokens are stored when the login redirect is issued and validated during the
/// OAuth callback.
pub struct CsrfSession<'a> {
    session: &'a Session,
}

impl<'a> CsrfSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    pub async fn set_token(&self, token: String) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_CSRF_TOKEN, token).await?;
        Ok(())
    }

    /// Retrieves and removes the CSRF token from the session.
    ///
    /// The token is removed so each one can only be used once.
    ///
    /// # Returns
    /// - `Ok(Some(token))` - CSRF token was found and removed
    /// - `Ok(None)` - No CSRF token in session
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn take_token(&self) -> Result<Option<String>, AppError> {
        let token = self.session.remove(SESSION_AUTH_CSRF_TOKEN).await?;
        Ok(token)
    }
}
