use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Player listed in a lineup, either in the starting XI or on the bench.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[sea_orm(table_name = "lineup_players")]
#[schema(as = LineupPlayer)]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub lineup_id: i32,
    pub player_id: i32,
    pub number: Option<i32>,
    pub position: Option<String>,
    pub grid: Option<String>,
    pub starter: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::lineup::Entity",
        from = "Column::LineupId",
        to = "super::lineup::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Lineup,
    #[sea_orm(
        belongs_to = "super::player::Entity",
        from = "Column::PlayerId",
        to = "super::player::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Player,
}

impl Related<super::lineup::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Lineup.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
