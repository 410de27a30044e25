use super::*;

/// Tests deleting an existing row and a missing one.
///
/// Expected: Ok(true) then Ok(false)
#[tokio::test]
async fn deletes_once() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_reference_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let player = factory::create_player(db).await?;
    let repo = ResourceRepository::<entity::player::Entity>::new(db);

    assert!(repo.delete(player.id).await?);
    assert!(!repo.delete(player.id).await?);
    assert!(repo.get(player.id).await?.is_none());

    Ok(())
}

/// Tests that deleting a fixture cascades to its events.
///
/// Expected: the event row is gone after the fixture is deleted
#[tokio::test]
async fn cascades_to_children() -> Result<(), DbErr> {
    use sea_orm::{ActiveModelTrait, ActiveValue, EntityTrait, PaginatorTrait};

    let test = TestBuilder::new().with_football_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, home, _, fixture) =
        test_utils::factory::helpers::create_fixture_with_dependencies(db).await?;
    entity::fixture_event::ActiveModel {
        external_key: ActiveValue::Set(format!("{}:10::Goal:Normal Goal:{}:", fixture.id, home.id)),
        fixture_id: ActiveValue::Set(fixture.id),
        team_id: ActiveValue::Set(Some(home.id)),
        player_id: ActiveValue::Set(None),
        assist_player_id: ActiveValue::Set(None),
        elapsed: ActiveValue::Set(10),
        extra: ActiveValue::Set(None),
        event_type: ActiveValue::Set("Goal".to_string()),
        detail: ActiveValue::Set(Some("Normal Goal".to_string())),
        comments: ActiveValue::Set(None),
        ..Default::default()
    }
    .insert(db)
    .await?;

    let repo = ResourceRepository::<entity::fixture::Entity>::new(db);
    assert!(repo.delete(fixture.id).await?);

    assert_eq!(entity::prelude::FixtureEvent::find().count(db).await?, 0);

    Ok(())
}
