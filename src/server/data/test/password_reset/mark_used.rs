use super::*;

/// Tests that a token can only be marked used once.
///
/// Expected: Ok(true) on the first call, Ok(false) on the second, and the token is no
/// longer valid
#[tokio::test]
async fn consumes_token_once() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let repo = PasswordResetRepository::new(db);
    let token = repo
        .create(user.id, "abc".to_string(), Utc::now() + Duration::minutes(60))
        .await?;

    assert!(repo.mark_used(token.id, Utc::now()).await?);
    assert!(!repo.mark_used(token.id, Utc::now()).await?);
    assert!(repo.find_valid("abc", Utc::now()).await?.is_none());

    Ok(())
}
