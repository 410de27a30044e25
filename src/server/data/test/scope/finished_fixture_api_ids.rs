use super::*;

/// Tests that only finished fixtures are listed, filtered by season when asked.
///
/// Expected: FT/AET/PEN fixtures of the season; NS and other seasons excluded
#[tokio::test]
async fn lists_finished_fixtures() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_football_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let league = factory::create_league(db).await?;
    let home = factory::create_team(db).await?;
    let away = factory::create_team(db).await?;

    for (api_id, status, season) in [
        (1001, "FT", 2024),
        (1002, "AET", 2024),
        (1003, "NS", 2024),
        (1004, "PEN", 2023),
    ] {
        FixtureFactory::new(db, league.id, home.id, away.id)
            .api_fixture_id(api_id)
            .status(status)
            .season(season)
            .build()
            .await?;
    }

    let repo = ImportScopeRepository::new(db);

    assert_eq!(repo.finished_fixture_api_ids(Some(2024)).await?, vec![1001, 1002]);
    assert_eq!(
        repo.finished_fixture_api_ids(None).await?,
        vec![1001, 1002, 1004]
    );

    Ok(())
}
