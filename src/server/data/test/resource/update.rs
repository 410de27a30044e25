use super::*;

/// Tests writing a modified model back to its row.
///
/// Expected: Ok(model) with the new value persisted
#[tokio::test]
async fn writes_all_columns() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_reference_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let country = factory::create_country_named(db, "France").await?;
    let repo = ResourceRepository::<entity::country::Entity>::new(db);

    let updated = repo
        .update(entity::country::Model {
            code: Some("FR".to_string()),
            ..country.clone()
        })
        .await?;

    assert_eq!(updated.id, country.id);
    assert_eq!(updated.code.as_deref(), Some("FR"));
    let stored = repo.get(country.id).await?.unwrap();
    assert_eq!(stored.code.as_deref(), Some("FR"));

    Ok(())
}
