use super::*;

/// Tests admin user successfully passes admin permission check.
///
/// Expected: Ok(SessionUser) with the admin role
#[tokio::test]
async fn grants_access_to_admin_user() -> Result<(), AppError> {
    let mut test = TestContext::new();
    let session = test.session().await.unwrap();

    AuthSession::new(session)
        .set_user(&user("admin-1", &["offline_access", "admin"]))
        .await?;

    let auth_guard = AuthGuard::new(session);
    let result = auth_guard.require(&[Permission::Admin]).await?;

    assert_eq!(result.id, "admin-1");
    assert!(result.is_admin());

    Ok(())
}

/// Tests non-admin user is denied admin permission.
///
/// Expected: Err(AuthError::AccessDenied) mentioning the admin role
#[tokio::test]
async fn denies_access_to_non_admin_user() -> Result<(), AppError> {
    let mut test = TestContext::new();
    let session = test.session().await.unwrap();

    AuthSession::new(session)
        .set_user(&user("user-1", &["offline_access"]))
        .await?;

    let auth_guard = AuthGuard::new(session);
    let result = auth_guard.require(&[Permission::Admin]).await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(user_id, message))) => {
            assert_eq!(user_id, "user-1");
            assert!(message.contains("admin"));
        }
        other => panic!("Expected AccessDenied error, got: {:?}", other),
    }

    Ok(())
}
