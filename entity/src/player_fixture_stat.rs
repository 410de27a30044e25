use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Per-match player statistics. Unique on (`fixture_id`, `player_id`).
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[sea_orm(table_name = "player_fixture_stats")]
#[schema(as = PlayerFixtureStat)]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub fixture_id: i32,
    pub player_id: i32,
    pub team_id: i32,
    pub minutes: Option<i32>,
    pub rating: Option<String>,
    pub captain: bool,
    pub substitute: bool,
    pub goals: Option<i32>,
    pub assists: Option<i32>,
    #[schema(value_type = Object)]
    pub statistics: serde_json::Value,
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
        belongs_to = "super::player::Entity",
        from = "Column::PlayerId",
        to = "super::player::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Player,
    #[sea_orm(
        belongs_to = "super::team::Entity",
        from = "Column::TeamId",
        to = "super::team::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Team,
}

impl ActiveModelBehavior for ActiveModel {}
