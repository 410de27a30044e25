use super::*;

/// Tests that an admin passes the admin permission check.
///
/// Expected: Ok(User) with the admin role
#[tokio::test]
async fn grants_access_to_admin_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = TokenService::new("test-secret", 60);

    let admin = User::from_entity(factory::create_admin(db).await?)?;
    let headers = bearer(&tokens.issue(&admin)?);

    let user = AuthGuard::new(db, &tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    assert_eq!(user.id, admin.id);
    assert!(user.is_admin());

    Ok(())
}

/// Tests that a regular user is denied the admin permission.
///
/// Expected: Err(AuthError::AccessDenied) naming the user
#[tokio::test]
async fn denies_access_to_non_admin_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = TokenService::new("test-secret", 60);

    let user = User::from_entity(factory::create_user(db).await?)?;
    let headers = bearer(&tokens.issue(&user)?);

    let result = AuthGuard::new(db, &tokens, &headers)
        .require(&[Permission::Admin])
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(user_id, _))) => {
            assert_eq!(user_id, user.id)
        }
        other => panic!("Expected AccessDenied, got: {:?}", other.map(|u| u.id)),
    }

    Ok(())
}

/// Tests that an empty permission list admits any authenticated user.
///
/// Expected: Ok(User)
#[tokio::test]
async fn empty_permission_list_grants_access() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = TokenService::new("test-secret", 60);

    let user = User::from_entity(factory::create_user(db).await?)?;
    let headers = bearer(&tokens.issue(&user)?);

    let returned = AuthGuard::new(db, &tokens, &headers).require(&[]).await?;

    assert_eq!(returned.email, user.email);

    Ok(())
}

/// Tests that a request without a bearer token is rejected.
///
/// Expected: Err(AuthError::MissingToken)
#[tokio::test]
async fn rejects_missing_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = TokenService::new("test-secret", 60);
    let headers = HeaderMap::new();

    let result = AuthGuard::new(db, &tokens, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));

    Ok(())
}

/// Tests that a token signed with another secret is rejected.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn rejects_foreign_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = TokenService::new("test-secret", 60);

    let user = User::from_entity(factory::create_user(db).await?)?;
    let foreign = TokenService::new("other-secret", 60).issue(&user)?;
    let headers = bearer(&foreign);

    let result = AuthGuard::new(db, &tokens, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));

    Ok(())
}

/// Tests that the token of a deleted user no longer authenticates.
///
/// Expected: Err(AuthError::UserNotFound)
#[tokio::test]
async fn rejects_token_of_deleted_user() -> Result<(), AppError> {
    use sea_orm::{EntityTrait, ModelTrait};

    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = TokenService::new("test-secret", 60);

    let model = factory::create_user(db).await?;
    let user = User::from_entity(model.clone())?;
    let headers = bearer(&tokens.issue(&user)?);
    model.delete(db).await?;
    assert!(entity::prelude::User::find_by_id(user.id)
        .one(db)
        .await?
        .is_none());

    let result = AuthGuard::new(db, &tokens, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotFound(_)))
    ));

    Ok(())
}
