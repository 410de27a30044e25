use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Player absence reported for a fixture or a league season.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[sea_orm(table_name = "injuries")]
#[schema(as = Injury)]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub external_key: String,
    pub player_id: i32,
    pub team_id: i32,
    pub fixture_id: Option<i32>,
    pub league_id: Option<i32>,
    pub season: Option<i32>,
    pub injury_type: Option<String>,
    pub reason: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
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
    #[sea_orm(
        belongs_to = "super::fixture::Entity",
        from = "Column::FixtureId",
        to = "super::fixture::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Fixture,
    #[sea_orm(
        belongs_to = "super::league::Entity",
        from = "Column::LeagueId",
        to = "super::league::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    League,
}

impl ActiveModelBehavior for ActiveModel {}
