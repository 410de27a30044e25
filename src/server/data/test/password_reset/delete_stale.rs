use super::*;

/// Tests that expired and used tokens are removed while valid ones stay.
///
/// Expected: Ok(2) and the valid token still present
#[tokio::test]
async fn removes_expired_and_used() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let repo = PasswordResetRepository::new(db);
    let now = Utc::now();

    repo.create(user.id, "expired".to_string(), now - Duration::minutes(1))
        .await?;
    let used = repo
        .create(user.id, "used".to_string(), now + Duration::minutes(60))
        .await?;
    repo.mark_used(used.id, now).await?;
    repo.create(user.id, "valid".to_string(), now + Duration::minutes(60))
        .await?;

    assert_eq!(repo.delete_stale(now).await?, 2);
    assert!(repo.find_valid("valid", now).await?.is_some());

    Ok(())
}
