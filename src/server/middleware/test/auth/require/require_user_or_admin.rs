use super::*;

/// Tests a user accessing their own resources.
///
/// Expected: Ok(SessionUser)
#[tokio::test]
async fn grants_access_to_same_user() -> Result<(), AppError> {
    let mut test = TestContext::new();
    let session = test.session().await.unwrap();

    AuthSession::new(session)
        .set_user(&user("user-1", &[]))
        .await?;

    let auth_guard = AuthGuard::new(session);
    let result = auth_guard
        .require(&[Permission::UserOrAdmin("user-1".to_string())])
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests an admin accessing another user's resources.
///
/// Expected: Ok(SessionUser)
#[tokio::test]
async fn grants_access_to_admin() -> Result<(), AppError> {
    let mut test = TestContext::new();
    let session = test.session().await.unwrap();

    AuthSession::new(session)
        .set_user(&user("admin-1", &["admin"]))
        .await?;

    let auth_guard = AuthGuard::new(session);
    let result = auth_guard
        .require(&[Permission::UserOrAdmin("user-1".to_string())])
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests a regular user accessing another user's resources.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_access_to_other_user() -> Result<(), AppError> {
    let mut test = TestContext::new();
    let session = test.session().await.unwrap();

    AuthSession::new(session)
        .set_user(&user("user-2", &[]))
        .await?;

    let auth_guard = AuthGuard::new(session);
    let result = auth_guard
        .require(&[Permission::UserOrAdmin("user-1".to_string())])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}
