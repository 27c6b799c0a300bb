use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::{auth::AuthGuard, auth::Permission, session::AuthSession},
    model::user::SessionUser,
};
use test_utils::context::TestContext;

mod require;

fn user(id: &str, roles: &[&str]) -> SessionUser {
    SessionUser {
        id: id.to_string(),
        username: format!("{}-name", id),
        roles: roles.iter().map(|role| role.to_string()).collect(),
    }
}
