//! Player factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a player with a unique external id.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::player::Model)` - Created player
/// - `Err(DbErr)` - Database error during insert
pub async fn create_player(db: &DatabaseConnection) -> Result<entity::player::Model, DbErr> {
    create_player_with_api_id(db, next_id() as i64).await
}

/// Creates a player with a specific external id.
pub async fn create_player_with_api_id(
    db: &DatabaseConnection,
    api_player_id: i64,
) -> Result<entity::player::Model, DbErr> {
    entity::player::ActiveModel {
        api_player_id: ActiveValue::Set(api_player_id),
        name: ActiveValue::Set(format!("Player {}", api_player_id)),
        firstname: ActiveValue::Set(None),
        lastname: ActiveValue::Set(None),
        age: ActiveValue::Set(Some(24)),
        birth_date: ActiveValue::Set(None),
        birth_place: ActiveValue::Set(None),
        birth_country: ActiveValue::Set(None),
        nationality: ActiveValue::Set(None),
        height: ActiveValue::Set(None),
        weight: ActiveValue::Set(None),
        injured: ActiveValue::Set(false),
        photo: ActiveValue::Set(None),
        ..Default::default()
    }
    .insert(db)
    .await
}
