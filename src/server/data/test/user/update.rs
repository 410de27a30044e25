use super::*;

/// Tests that only the provided fields change.
///
/// Expected: role updated, email and name untouched
#[tokio::test]
async fn applies_partial_update() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let repo = UserRepository::new(db);

    let updated = repo
        .update(
            user.id,
            UpdateUserParam {
                role: Some(Role::Admin),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.role, Role::Admin);
    assert_eq!(updated.email, user.email);
    assert_eq!(updated.name, user.name);
    assert!(updated.updated_at >= user.updated_at);

    Ok(())
}

/// Tests updating an unknown user.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserRepository::new(db)
        .update(42, UpdateUserParam::default())
        .await?;

    assert!(result.is_none());

    Ok(())
}
