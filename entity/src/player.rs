use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Player profile.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[sea_orm(table_name = "players")]
#[schema(as = Player)]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub api_player_id: i64,
    pub name: String,
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub age: Option<i32>,
    pub birth_date: Option<chrono::NaiveDate>,
    pub birth_place: Option<String>,
    pub birth_country: Option<String>,
    pub nationality: Option<String>,
    pub height: Option<String>,
    pub weight: Option<String>,
    pub injured: bool,
    pub photo: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::player_season_stat::Entity")]
    PlayerSeasonStat,
}

impl Related<super::player_season_stat::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PlayerSeasonStat.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
