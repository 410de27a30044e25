//! Coach factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a coach with a unique external id, optionally attached to a team.
///
/// # Arguments
/// - `db` - Database connection
/// - `team_id` - Local id of the coach's current team
///
/// # Returns
/// - `Ok(entity::coach::Model)` - Created coach
/// - `Err(DbErr)` - Database error during insert
pub async fn create_coach(
    db: &DatabaseConnection,
    team_id: Option<i32>,
) -> Result<entity::coach::Model, DbErr> {
    let id = next_id();
    entity::coach::ActiveModel {
        api_coach_id: ActiveValue::Set(id as i64),
        name: ActiveValue::Set(format!("Coach {}", id)),
        firstname: ActiveValue::Set(None),
        lastname: ActiveValue::Set(None),
        age: ActiveValue::Set(None),
        birth_date: ActiveValue::Set(None),
        nationality: ActiveValue::Set(None),
        photo: ActiveValue::Set(None),
        team_id: ActiveValue::Set(team_id),
        ..Default::default()
    }
    .insert(db)
    .await
}
