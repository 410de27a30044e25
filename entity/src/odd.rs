use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A single quoted price: one outcome (`value`) of one bet at one bookmaker for one
/// fixture. Unique on (`fixture_id`, `bookmaker_id`, `bet_id`, `value`).
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[sea_orm(table_name = "odds")]
#[schema(as = Odd)]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub fixture_id: i32,
    pub bookmaker_id: i32,
    pub bet_id: i32,
    pub value: String,
    pub odd: String,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
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
        belongs_to = "super::bookmaker::Entity",
        from = "Column::BookmakerId",
        to = "super::bookmaker::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Bookmaker,
    #[sea_orm(
        belongs_to = "super::bet::Entity",
        from = "Column::BetId",
        to = "super::bet::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Bet,
}

impl ActiveModelBehavior for ActiveModel {}
