use super::*;

/// Tests listing rows in id order with limit and skip.
///
/// Expected: full list of 3, then the second row alone
#[tokio::test]
async fn paginates_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_reference_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let a = factory::create_country_named(db, "Argentina").await?;
    let b = factory::create_country_named(db, "Brazil").await?;
    factory::create_country_named(db, "Chile").await?;

    let repo = ResourceRepository::<entity::country::Entity>::new(db);

    let all = repo.find(None, None).await?;
    assert_eq!(all.len(), 3);
    assert_eq!(all[0].id, a.id);

    let page = repo.find(Some(1), Some(1)).await?;
    assert_eq!(page.len(), 1);
    assert_eq!(page[0].id, b.id);

    Ok(())
}

/// Tests fetching a single row by id.
///
/// Expected: Some for an existing id, None otherwise
#[tokio::test]
async fn gets_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_reference_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let venue = factory::create_venue(db).await?;
    let repo = ResourceRepository::<entity::venue::Entity>::new(db);

    assert_eq!(repo.get(venue.id).await?.map(|v| v.id), Some(venue.id));
    assert!(repo.get(venue.id + 100).await?.is_none());

    Ok(())
}
