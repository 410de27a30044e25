use super::*;

/// Tests deleting a user together with their reset tokens.
///
/// Expected: Ok(true), then no user and no token rows
#[tokio::test]
async fn deletes_user_and_tokens() -> Result<(), AppError> {
    use crate::server::data::password_reset::PasswordResetRepository;
    use sea_orm::{EntityTrait, PaginatorTrait};

    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    PasswordResetRepository::new(db)
        .create(
            user.id,
            "digest".to_string(),
            chrono::Utc::now() + chrono::Duration::minutes(5),
        )
        .await?;

    let repo = UserRepository::new(db);

    assert!(repo.delete(user.id).await?);
    assert!(!repo.delete(user.id).await?);
    assert_eq!(entity::prelude::PasswordReset::find().count(db).await?, 0);

    Ok(())
}
