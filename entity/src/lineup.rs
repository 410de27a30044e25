use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Team sheet of one side of a fixture. Unique on (`fixture_id`, `team_id`).
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[sea_orm(table_name = "lineups")]
#[schema(as = Lineup)]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub fixture_id: i32,
    pub team_id: i32,
    pub formation: Option<String>,
    pub coach_id: Option<i32>,
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
        on_delete = "Cascade"
    )]
    Team,
    #[sea_orm(
        belongs_to = "super::coach::Entity",
        from = "Column::CoachId",
        to = "super::coach::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Coach,
    #[sea_orm(has_many = "super::lineup_player::Entity")]
    LineupPlayer,
}

impl Related<super::lineup_player::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LineupPlayer.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
