//! Country factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a country with a unique name.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::country::Model)` - Created country
/// - `Err(DbErr)` - Database error during insert
pub async fn create_country(db: &DatabaseConnection) -> Result<entity::country::Model, DbErr> {
    create_country_named(db, format!("Country {}", next_id())).await
}

/// Creates a country with the given name.
pub async fn create_country_named(
    db: &DatabaseConnection,
    name: impl Into<String>,
) -> Result<entity::country::Model, DbErr> {
    entity::country::ActiveModel {
        name: ActiveValue::Set(name.into()),
        code: ActiveValue::Set(None),
        flag: ActiveValue::Set(None),
        ..Default::default()
    }
    .insert(db)
    .await
}
