use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Match event (goal, card, substitution, VAR decision).
///
/// Events carry no upstream identifier; `external_key` is derived from the fixture,
/// minute, type, detail, team and player so re-imports match the same row.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[sea_orm(table_name = "fixture_events")]
#[schema(as = FixtureEvent)]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub external_key: String,
    pub fixture_id: i32,
    pub team_id: Option<i32>,
    pub player_id: Option<i32>,
    pub assist_player_id: Option<i32>,
    pub elapsed: i32,
    pub extra: Option<i32>,
    pub event_type: String,
    pub detail: Option<String>,
    pub comments: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::fixture::Entity",
        from = "Column::FixtureId",
        to = "super::fixture::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Fixture,
    #[sea_orm(
        belongs_to = "super::team::Entity",
        from = "Column::TeamId",
        to = "super::team::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Team,
    #[sea_orm(
        belongs_to = "super::player::Entity",
        from = "Column::PlayerId",
        to = "super::player::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull",
        fk_name = "fk_fixture_events_player"
    )]
    Player,
    #[sea_orm(
        belongs_to = "super::player::Entity",
        from = "Column::AssistPlayerId",
        to = "super::player::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull",
        fk_name = "fk_fixture_events_assist_player"
    )]
    AssistPlayer,
}

impl ActiveModelBehavior for ActiveModel {}
