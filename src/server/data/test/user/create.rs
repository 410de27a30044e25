use super::*;

/// Tests creating a local account.
///
/// Expected: Ok(User) with the given role and hash
#[tokio::test]
async fn creates_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParam {
            email: "ada@example.com".to_string(),
            name: Some("Ada".to_string()),
            password_hash: Some("hash".to_string()),
            role: Role::Admin,
            google_sub: None,
        })
        .await?;

    assert!(user.id > 0);
    assert_eq!(user.role, Role::Admin);
    assert_eq!(user.password_hash.as_deref(), Some("hash"));
    assert!(repo.admin_exists().await?);

    Ok(())
}

/// Tests that a second account with the same email is rejected.
///
/// Expected: Err(AppError::DbErr) with a unique constraint violation
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_user(db).await?;
    let repo = UserRepository::new(db);

    let result = repo
        .create(CreateUserParam {
            email: existing.email,
            name: None,
            password_hash: None,
            role: Role::User,
            google_sub: None,
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::DbErr(ref err))
            if matches!(err.sql_err(), Some(sea_orm::SqlErr::UniqueConstraintViolation(_)))
    ));

    Ok(())
}
