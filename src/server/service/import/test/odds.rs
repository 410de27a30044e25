use super::*;
use test_utils::factory::fixture::FixtureFactory;

/// Tests that odds upsert their bookmaker and bet inline and count one row per value.
///
/// Expected: created 3, one bookmaker, one bet; a re-import updates all three
#[tokio::test]
async fn imports_odds_with_inline_bookmakers() -> Result<(), AppError> {
    let test = TestBuilder::new().with_football_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let league = factory::create_league(db).await?;
    let home = factory::create_team(db).await?;
    let away = factory::create_team(db).await?;
    FixtureFactory::new(db, league.id, home.id, away.id)
        .api_fixture_id(1001)
        .build()
        .await?;

    let records = vec![json!({
        "fixture": {"id": 1001},
        "update": "2023-08-10T09:00:00+00:00",
        "bookmakers": [{
            "id": 8, "name": "Bet365",
            "bets": [{
                "id": 1, "name": "Match Winner",
                "values": [
                    {"value": "Home", "odd": "1.80"},
                    {"value": "Draw", "odd": "3.60"},
                    {"value": "Away", "odd": "4.50"}
                ]
            }]
        }]
    })];

    let first = import_records(db, ImportKind::Odds, records.clone()).await?;
    let second = import_records(db, ImportKind::Odds, records).await?;

    assert_eq!(first.created, 3);
    assert_eq!(second.updated, 3);
    assert_eq!(entity::prelude::Odd::find().count(db).await?, 3);
    assert_eq!(entity::prelude::Bookmaker::find().count(db).await?, 1);
    assert_eq!(entity::prelude::Bet::find().count(db).await?, 1);

    Ok(())
}

/// Tests that bookmakers are keyed by their provider id.
///
/// Expected: renamed bookmaker updated in place
#[tokio::test]
async fn bookmaker_import_updates_by_provider_id() -> Result<(), AppError> {
    let test = TestBuilder::new().with_football_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    import_records(
        db,
        ImportKind::Bookmakers,
        vec![json!({"id": 8, "name": "Bet365"})],
    )
    .await?;
    let report = import_records(
        db,
        ImportKind::Bookmakers,
        vec![json!({"id": 8, "name": "bet365"})],
    )
    .await?;

    assert_eq!(report.updated, 1);
    let bookmaker = entity::prelude::Bookmaker::find().one(db).await?.unwrap();
    assert_eq!(bookmaker.name, "bet365");

    Ok(())
}

/// Tests that bet types are keyed by their provider id so that a re-import only
/// updates.
///
/// Expected: created 2, then updated 2; the renamed bet keeps its row
#[tokio::test]
async fn bet_import_is_idempotent() -> Result<(), AppError> {
    let test = TestBuilder::new().with_football_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = import_records(
        db,
        ImportKind::Bets,
        vec![
            json!({"id": 1, "name": "Match Winner"}),
            json!({"id": 5, "name": "Goals Over/Under"}),
        ],
    )
    .await?;
    let second = import_records(
        db,
        ImportKind::Bets,
        vec![
            json!({"id": 1, "name": "Match Winner"}),
            json!({"id": 5, "name": "Goals Over / Under"}),
        ],
    )
    .await?;

    assert_eq!(first.created, 2);
    assert_eq!(second.created, 0);
    assert_eq!(second.updated, 2);
    assert_eq!(entity::prelude::Bet::find().count(db).await?, 2);

    let renamed = entity::prelude::Bet::find()
        .all(db)
        .await?
        .into_iter()
        .find(|bet| bet.api_bet_id == 5)
        .unwrap();
    assert_eq!(renamed.name, "Goals Over / Under");

    Ok(())
}

/// Tests that the abort policy of the bet importer propagates the first malformed
/// record and stops the run.
///
/// Expected: Err(Decode), only the bet before the malformed record written
#[tokio::test]
async fn bet_import_aborts_on_malformed_record() -> Result<(), AppError> {
    let test = TestBuilder::new().with_football_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = import_records(
        db,
        ImportKind::Bets,
        vec![
            json!({"id": 1, "name": "Match Winner"}),
            json!({"id": "one", "name": "Home/Away"}),
            json!({"id": 3, "name": "Second Half Winner"}),
        ],
    )
    .await;

    assert!(matches!(
        result,
        Err(AppError::ImportErr(ImportError::Decode {
            kind: ImportKind::Bets,
            ..
        }))
    ));
    assert_eq!(entity::prelude::Bet::find().count(db).await?, 1);

    Ok(())
}
