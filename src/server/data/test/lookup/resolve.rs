use super::*;

/// Tests resolving provider ids to local ids for known rows.
///
/// Expected: Some(local id) for each known reference
#[tokio::test]
async fn resolves_known_references() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_football_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let country = factory::create_country_named(db, "England").await?;
    let team = factory::create_team_with_api_id(db, 33).await?;
    let player = factory::create_player_with_api_id(db, 276).await?;
    let bookmaker = factory::create_bookmaker(db).await?;
    let (league, _, _, fixture) =
        test_utils::factory::helpers::create_fixture_with_dependencies(db).await?;

    let lookup = ReferenceLookup::new(db);

    assert_eq!(lookup.country_by_name("England").await?, Some(country.id));
    assert_eq!(lookup.team(33).await?, Some(team.id));
    assert_eq!(lookup.player(276).await?, Some(player.id));
    assert_eq!(lookup.league(league.api_league_id).await?, Some(league.id));
    assert_eq!(lookup.fixture(fixture.api_fixture_id).await?, Some(fixture.id));
    assert_eq!(
        lookup.bookmaker(bookmaker.api_bookmaker_id).await?,
        Some(bookmaker.id)
    );

    Ok(())
}

/// Tests that unknown references resolve to None instead of an error.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_references() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_football_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let lookup = ReferenceLookup::new(db);

    assert_eq!(lookup.team(999_999).await?, None);
    assert_eq!(lookup.country_by_name("Atlantis").await?, None);
    assert_eq!(lookup.lineup(1, 1).await?, None);

    Ok(())
}

/// Tests that lookups run inside a transaction and see its uncommitted rows.
///
/// Expected: Some(local id) for a team created in the same transaction
#[tokio::test]
async fn resolves_inside_transaction() -> Result<(), DbErr> {
    use sea_orm::{ActiveModelTrait, ActiveValue};

    let test = TestBuilder::new().with_reference_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let txn = db.begin().await?;
    let team = entity::team::ActiveModel {
        api_team_id: ActiveValue::Set(50),
        name: ActiveValue::Set("Manchester City".to_string()),
        code: ActiveValue::Set(None),
        country: ActiveValue::Set(None),
        founded: ActiveValue::Set(None),
        national: ActiveValue::Set(false),
        logo: ActiveValue::Set(None),
        venue_id: ActiveValue::Set(None),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    let resolved = ReferenceLookup::new(&txn).team(50).await?;
    txn.rollback().await?;

    assert_eq!(resolved, Some(team.id));

    Ok(())
}
