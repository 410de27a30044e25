use super::*;

/// Tests that lookups by email ignore case and surrounding whitespace.
///
/// Expected: Ok(Some(User)) for a differently cased email, Ok(None) for unknown
#[tokio::test]
async fn finds_case_insensitively() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .email("grace@example.com")
        .build()
        .await?;
    let repo = UserRepository::new(db);

    let found = repo.find_by_email("  Grace@Example.com ").await?;
    assert_eq!(found.map(|u| u.id), Some(user.id));

    assert!(repo.find_by_email("nobody@example.com").await?.is_none());
    assert!(repo.email_exists("grace@example.com").await?);

    Ok(())
}

/// Tests looking a user up by linked Google subject.
///
/// Expected: Ok(Some(User)) with google_sub set
#[tokio::test]
async fn finds_by_google_sub() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .google_sub("google-123")
        .build()
        .await?;
    let repo = UserRepository::new(db);

    let found = repo.find_by_google_sub("google-123").await?.unwrap();
    assert_eq!(found.id, user.id);
    assert!(found.clone().into_dto().google_linked);

    Ok(())
}

/// Tests that a stored role outside admin/user is reported instead of guessed.
///
/// Expected: Err(AppError::InternalErr)
#[tokio::test]
async fn rejects_unknown_role() -> Result<(), AppError> {
    use sea_orm::{ActiveModelTrait, ActiveValue};

    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let mut active: entity::user::ActiveModel = user.clone().into();
    active.role = ActiveValue::Set("superuser".to_string());
    active.update(db).await?;

    let result = UserRepository::new(db).find_by_id(user.id).await;

    assert!(matches!(result, Err(AppError::InternalErr(_))));

    Ok(())
}
