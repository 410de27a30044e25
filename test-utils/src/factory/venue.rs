//! Venue factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a venue with a unique external id.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::venue::Model)` - Created venue
/// - `Err(DbErr)` - Database error during insert
pub async fn create_venue(db: &DatabaseConnection) -> Result<entity::venue::Model, DbErr> {
    let id = next_id();
    entity::venue::ActiveModel {
        api_venue_id: ActiveValue::Set(id as i64),
        name: ActiveValue::Set(format!("Stadium {}", id)),
        address: ActiveValue::Set(None),
        city: ActiveValue::Set(Some("London".to_string())),
        country: ActiveValue::Set(Some("England".to_string())),
        capacity: ActiveValue::Set(Some(40_000)),
        surface: ActiveValue::Set(Some("grass".to_string())),
        image: ActiveValue::Set(None),
        ..Default::default()
    }
    .insert(db)
    .await
}
