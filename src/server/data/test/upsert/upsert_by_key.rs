use super::*;

fn team_model(api_team_id: i64, name: &str) -> entity::team::ActiveModel {
    entity::team::ActiveModel {
        api_team_id: ActiveValue::Set(api_team_id),
        name: ActiveValue::Set(name.to_string()),
        code: ActiveValue::Set(None),
        country: ActiveValue::Set(Some("England".to_string())),
        founded: ActiveValue::Set(Some(1878)),
        national: ActiveValue::Set(false),
        logo: ActiveValue::Set(None),
        venue_id: ActiveValue::Set(None),
        ..Default::default()
    }
}

/// Tests inserting a row whose key does not exist yet.
///
/// Expected: Ok((Created, model)) with a generated id
#[tokio::test]
async fn creates_missing_row() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_reference_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (outcome, team) = upsert_by_key::<entity::prelude::Team, _>(
        db,
        &[entity::team::Column::ApiTeamId],
        team_model(33, "Manchester United"),
    )
    .await?;

    assert_eq!(outcome, UpsertOutcome::Created);
    assert!(team.id > 0);
    assert_eq!(team.name, "Manchester United");

    Ok(())
}

/// Tests that a second upsert with the same key updates the row in place.
///
/// Verifies that the primary key is unchanged, the set columns are overwritten and no
/// second row is inserted.
///
/// Expected: Ok((Updated, model)) with the original id and one row in the table
#[tokio::test]
async fn updates_existing_row() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_reference_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, first) = upsert_by_key::<entity::prelude::Team, _>(
        db,
        &[entity::team::Column::ApiTeamId],
        team_model(33, "Man Utd"),
    )
    .await?;

    let (outcome, second) = upsert_by_key::<entity::prelude::Team, _>(
        db,
        &[entity::team::Column::ApiTeamId],
        team_model(33, "Manchester United"),
    )
    .await?;

    assert_eq!(outcome, UpsertOutcome::Updated);
    assert_eq!(second.id, first.id);
    assert_eq!(second.name, "Manchester United");
    assert_eq!(entity::prelude::Team::find().count(db).await?, 1);

    Ok(())
}

/// Tests upserting on a composite key.
///
/// Expected: same (league, year) updates, a different year creates
#[tokio::test]
async fn supports_composite_keys() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_reference_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let league = factory::create_league(db).await?;

    let season = |year: i32, current: bool| entity::season::ActiveModel {
        league_id: ActiveValue::Set(league.id),
        year: ActiveValue::Set(year),
        start_date: ActiveValue::Set(None),
        end_date: ActiveValue::Set(None),
        current: ActiveValue::Set(current),
        coverage: ActiveValue::Set(None),
        ..Default::default()
    };
    let key = [
        entity::season::Column::LeagueId,
        entity::season::Column::Year,
    ];

    let (first, _) = upsert_by_key::<entity::prelude::Season, _>(db, &key, season(2023, true)).await?;
    let (second, updated) =
        upsert_by_key::<entity::prelude::Season, _>(db, &key, season(2023, false)).await?;
    let (third, _) = upsert_by_key::<entity::prelude::Season, _>(db, &key, season(2024, true)).await?;

    assert_eq!(first, UpsertOutcome::Created);
    assert_eq!(second, UpsertOutcome::Updated);
    assert!(!updated.current);
    assert_eq!(third, UpsertOutcome::Created);
    assert_eq!(entity::prelude::Season::find().count(db).await?, 2);

    Ok(())
}

/// Tests that an unset key column is rejected before touching the database.
///
/// Expected: Err(DbErr::Custom)
#[tokio::test]
async fn rejects_unset_key_column() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_reference_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let mut model = team_model(33, "Manchester United");
    model.api_team_id = ActiveValue::NotSet;

    let result =
        upsert_by_key::<entity::prelude::Team, _>(db, &[entity::team::Column::ApiTeamId], model)
            .await;

    assert!(matches!(result, Err(DbErr::Custom(_))));
    assert_eq!(entity::prelude::Team::find().count(db).await?, 0);

    Ok(())
}

/// Tests that a key column set to null is rejected, since it would never match the
/// row it created and every re-run would insert again.
///
/// Expected: Err(DbErr::Custom) naming the null column, no row written
#[tokio::test]
async fn rejects_null_key_column() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_reference_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = upsert_by_key::<entity::prelude::Team, _>(
        db,
        &[
            entity::team::Column::ApiTeamId,
            entity::team::Column::VenueId,
        ],
        team_model(33, "Manchester United"),
    )
    .await;

    assert!(matches!(result, Err(DbErr::Custom(message)) if message.contains("is null")));
    assert_eq!(entity::prelude::Team::find().count(db).await?, 0);

    Ok(())
}
