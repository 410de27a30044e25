use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Player move between two clubs. Either side may be a club that is not tracked
/// locally, in which case the team reference is left empty.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[sea_orm(table_name = "transfers")]
#[schema(as = Transfer)]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub external_key: String,
    pub player_id: i32,
    pub date: Option<chrono::NaiveDate>,
    pub transfer_type: Option<String>,
    pub team_in_id: Option<i32>,
    pub team_out_id: Option<i32>,
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
        from = "Column::TeamInId",
        to = "super::team::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull",
        fk_name = "fk_transfers_team_in"
    )]
    TeamIn,
    #[sea_orm(
        belongs_to = "super::team::Entity",
        from = "Column::TeamOutId",
        to = "super::team::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull",
        fk_name = "fk_transfers_team_out"
    )]
    TeamOut,
}

impl ActiveModelBehavior for ActiveModel {}
