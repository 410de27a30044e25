use super::*;

/// Tests that insert ignores the id of the model and returns the generated one.
///
/// Expected: Ok(model) with a database-assigned id
#[tokio::test]
async fn assigns_new_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_reference_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_country_named(db, "Spain").await?;
    let repo = ResourceRepository::<entity::country::Entity>::new(db);

    let created = repo
        .insert(entity::country::Model {
            id: 0,
            name: "Italy".to_string(),
            code: Some("IT".to_string()),
            flag: None,
        })
        .await?;

    assert!(created.id > 1);
    assert_eq!(created.code.as_deref(), Some("IT"));
    assert_eq!(repo.count().await?, 2);

    Ok(())
}

/// Tests that unique columns are enforced.
///
/// Expected: Err(DbErr) that reports a unique constraint violation
#[tokio::test]
async fn rejects_duplicate_unique_column() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_reference_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_country_named(db, "Spain").await?;
    let repo = ResourceRepository::<entity::country::Entity>::new(db);

    let result = repo
        .insert(entity::country::Model {
            id: 0,
            name: "Spain".to_string(),
            code: None,
            flag: None,
        })
        .await;

    let err = result.unwrap_err();
    assert!(matches!(
        err.sql_err(),
        Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}
