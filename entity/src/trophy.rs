use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Honour won by a player or a coach. Exactly one of `player_id` / `coach_id` is set.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[sea_orm(table_name = "trophies")]
#[schema(as = Trophy)]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub external_key: String,
    pub player_id: Option<i32>,
    pub coach_id: Option<i32>,
    pub league: String,
    pub country: Option<String>,
    pub season: Option<String>,
    pub place: Option<String>,
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
        belongs_to = "super::coach::Entity",
        from = "Column::CoachId",
        to = "super::coach::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Coach,
}

impl ActiveModelBehavior for ActiveModel {}
