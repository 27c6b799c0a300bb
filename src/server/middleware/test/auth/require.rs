use super::*;

mod require_admin;
mod require_user_or_admin;

/// Tests that a request without a session user is rejected.
///
/// Expected: Err(AuthError::UserNotInSession)
#[tokio::test]
async fn rejects_missing_session_user() -> Result<(), AppError> {
    let mut test = TestContext::new();
    let session = test.session().await.unwrap();

    let auth_guard = AuthGuard::new(session);
    let result = auth_guard.require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));

    Ok(())
}

/// Tests empty permission list grants access.
///
/// Verifies that when no permissions are required, any logged-in user is
/// granted access.
///
/// Expected: Ok(SessionUser)
#[tokio::test]
async fn empty_permission_list_grants_access() -> Result<(), AppError> {
    let mut test = TestContext::new();
    let session = test.session().await.unwrap();

    AuthSession::new(session)
        .set_user(&user("user-1", &[]))
        .await?;

    let auth_guard = AuthGuard::new(session);
    let result = auth_guard.require(&[]).await?;

    assert_eq!(result.id, "user-1");

    Ok(())
}

/// Tests that if any permission fails, the whole check fails.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn fails_if_any_permission_missing() -> Result<(), AppError> {
    let mut test = TestContext::new();
    let session = test.session().await.unwrap();

    AuthSession::new(session)
        .set_user(&user("user-1", &[]))
        .await?;

    let auth_guard = AuthGuard::new(session);
    let result = auth_guard
        .require(&[
            Permission::UserOrAdmin("user-1".to_string()),
            Permission::Admin,
        ])
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(user_id, _))) => {
            assert_eq!(user_id, "user-1");
        }
        other => panic!("Expected AccessDenied error, got: {:?}", other),
    }

    Ok(())
}
