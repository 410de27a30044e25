use super::*;

/// Tests that upcoming fixtures yield one provider id pair per team pairing.
///
/// Verifies that the return leg of the same pairing collapses into one pair and that
/// finished fixtures are ignored.
///
/// Expected: [(33, 50)]
#[tokio::test]
async fn pairs_upcoming_fixtures() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_football_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let league = factory::create_league(db).await?;
    let united = factory::create_team_with_api_id(db, 33).await?;
    let city = factory::create_team_with_api_id(db, 50).await?;
    let spurs = factory::create_team_with_api_id(db, 47).await?;

    FixtureFactory::new(db, league.id, city.id, united.id)
        .status("NS")
        .build()
        .await?;
    FixtureFactory::new(db, league.id, united.id, city.id)
        .status("NS")
        .build()
        .await?;
    FixtureFactory::new(db, league.id, united.id, spurs.id)
        .status("FT")
        .build()
        .await?;

    let repo = ImportScopeRepository::new(db);

    assert_eq!(repo.upcoming_fixture_pairs().await?, vec![(33, 50)]);

    Ok(())
}
