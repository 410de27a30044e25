use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[sea_orm(table_name = "fixtures")]
#[schema(as = Fixture)]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub api_fixture_id: i64,
    pub league_id: i32,
    pub season: i32,
    pub round: Option<String>,
    pub referee: Option<String>,
    pub timezone: Option<String>,
    pub date: chrono::DateTime<chrono::Utc>,
    pub venue_id: Option<i32>,
    /// Provider short status code, e.g. `NS`, `FT`, `AET`, `PEN`.
    pub status_short: String,
    pub status_long: Option<String>,
    pub elapsed: Option<i32>,
    pub home_team_id: i32,
    pub away_team_id: i32,
    pub home_goals: Option<i32>,
    pub away_goals: Option<i32>,
    pub halftime_home: Option<i32>,
    pub halftime_away: Option<i32>,
    pub fulltime_home: Option<i32>,
    pub fulltime_away: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::league::Entity",
        from = "Column::LeagueId",
        to = "super::league::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    League,
    #[sea_orm(
        belongs_to = "super::venue::Entity",
        from = "Column::VenueId",
        to = "super::venue::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Venue,
    #[sea_orm(
        belongs_to = "super::team::Entity",
        from = "Column::HomeTeamId",
        to = "super::team::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade",
        fk_name = "fk_fixtures_home_team"
    )]
    HomeTeam,
    #[sea_orm(
        belongs_to = "super::team::Entity",
        from = "Column::AwayTeamId",
        to = "super::team::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade",
        fk_name = "fk_fixtures_away_team"
    )]
    AwayTeam,
}

impl Related<super::league::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::League.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
