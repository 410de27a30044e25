use super::*;

/// Tests that a fresh token is found by its digest.
///
/// Expected: Ok(Some(token))
#[tokio::test]
async fn finds_unused_token() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let repo = PasswordResetRepository::new(db);
    let token = repo
        .create(user.id, "abc".to_string(), Utc::now() + Duration::minutes(60))
        .await?;

    let found = repo.find_valid("abc", Utc::now()).await?;

    assert_eq!(found.map(|t| t.id), Some(token.id));

    Ok(())
}

/// Tests that an expired token is not returned.
///
/// Expected: Ok(None)
#[tokio::test]
async fn ignores_expired_token() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let repo = PasswordResetRepository::new(db);
    repo.create(user.id, "abc".to_string(), Utc::now() - Duration::minutes(1))
        .await?;

    assert!(repo.find_valid("abc", Utc::now()).await?.is_none());

    Ok(())
}
