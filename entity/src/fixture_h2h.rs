use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Historical meeting between two teams, imported from the head-to-head endpoint.
/// The league is kept only when it is already known locally.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[sea_orm(table_name = "fixtures_h2h")]
#[schema(as = FixtureH2h)]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub api_fixture_id: i64,
    pub league_id: Option<i32>,
    pub season: Option<i32>,
    pub date: chrono::DateTime<chrono::Utc>,
    pub status_short: String,
    pub home_team_id: i32,
    pub away_team_id: i32,
    pub home_goals: Option<i32>,
    pub away_goals: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::league::Entity",
        from = "Column::LeagueId",
        to = "super::league::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    League,
    #[sea_orm(
        belongs_to = "super::team::Entity",
        from = "Column::HomeTeamId",
        to = "super::team::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade",
        fk_name = "fk_fixtures_h2h_home_team"
    )]
    HomeTeam,
    #[sea_orm(
        belongs_to = "super::team::Entity",
        from = "Column::AwayTeamId",
        to = "super::team::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade",
        fk_name = "fk_fixtures_h2h_away_team"
    )]
    AwayTeam,
}

impl ActiveModelBehavior for ActiveModel {}
