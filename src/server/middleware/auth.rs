use tower_sessions::Session;

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::SessionUser,
};

pub enum Permission {
    /// User holds the `admin` realm role.
    Admin,
    /// User is the given Keycloak user or an admin.
    UserOrAdmin(String),
}

pub struct AuthGuard<'a> {
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Returns the session user if they hold every listed permission.
    ///
    /// An empty list only requires a logged-in user.
    ///
    /// # Returns
    /// - `Ok(SessionUser)` - User is logged in and authorized
    /// - `Err(AuthError::UserNotInSession)` - Nobody is logged in
    /// - `Err(AuthError::AccessDenied)` - A permission is missing
    pub async fn require(&self, permissions: &[Permission]) -> Result<SessionUser, AppError> {
        let Some(user) = AuthSession::new(self.session).get_user().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        authorize(&user, permissions)?;

        Ok(user)
    }
}

/// Checks an already loaded user against a list of permissions.
///
/// Used when the resource deciding access has to be loaded after the login check.
pub fn authorize(user: &SessionUser, permissions: &[Permission]) -> Result<(), AuthError> {
    for permission in permissions {
        match permission {
            Permission::Admin => {
                if !user.is_admin() {
                    return Err(AuthError::AccessDenied(
                        user.id.clone(),
                        "User attempted to access an admin endpoint without the admin role"
                            .to_string(),
                    ));
                }
            }
            Permission::UserOrAdmin(user_id) => {
                if &user.id != user_id && !user.is_admin() {
                    return Err(AuthError::AccessDenied(
                        user.id.clone(),
                        format!(
                            "User attempted to access resources of user {} without the admin role",
                            user_id
                        ),
                    ));
                }
            }
        }
    }

    Ok(())
}
