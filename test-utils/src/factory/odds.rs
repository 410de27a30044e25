//! Bookmaker and bet factories.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a bookmaker with a unique external id.
pub async fn create_bookmaker(db: &DatabaseConnection) -> Result<entity::bookmaker::Model, DbErr> {
    let id = next_id();
    entity::bookmaker::ActiveModel {
        api_bookmaker_id: ActiveValue::Set(id as i64),
        name: ActiveValue::Set(format!("Bookmaker {}", id)),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates a bet market with a unique external id.
pub async fn create_bet(db: &DatabaseConnection) -> Result<entity::bet::Model, DbErr> {
    let id = next_id();
    entity::bet::ActiveModel {
        api_bet_id: ActiveValue::Set(id as i64),
        name: ActiveValue::Set(format!("Bet {}", id)),
        ..Default::default()
    }
    .insert(db)
    .await
}
