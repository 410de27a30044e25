use super::*;

/// Tests that team countries are deduplicated and sorted.
///
/// Expected: ["England", "Spain"]
#[tokio::test]
async fn lists_distinct_countries() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_reference_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    TeamFactory::new(db).country("Spain").build().await?;
    TeamFactory::new(db).country("England").build().await?;
    TeamFactory::new(db).country("England").build().await?;

    let repo = ImportScopeRepository::new(db);

    assert_eq!(
        repo.team_countries().await?,
        vec!["England".to_string(), "Spain".to_string()]
    );

    Ok(())
}
