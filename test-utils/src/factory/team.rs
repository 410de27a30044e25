//! Team factory for creating test team entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test teams with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let team = TeamFactory::new(&db)
///     .api_team_id(33)
///     .name("Manchester United")
///     .build()
///     .await?;
/// ```
pub struct TeamFactory<'a> {
    db: &'a DatabaseConnection,
    api_team_id: i64,
    name: String,
    country: Option<String>,
    venue_id: Option<i32>,
}

impl<'a> TeamFactory<'a> {
    /// Creates a new TeamFactory with default values.
    ///
    /// Defaults:
    /// - api_team_id: unique counter value
    /// - name: `"Team {id}"`
    /// - country: `"England"`
    /// - venue_id: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            api_team_id: id as i64,
            name: format!("Team {}", id),
            country: Some("England".to_string()),
            venue_id: None,
        }
    }

    pub fn api_team_id(mut self, api_team_id: i64) -> Self {
        self.api_team_id = api_team_id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    pub fn venue_id(mut self, venue_id: i32) -> Self {
        self.venue_id = Some(venue_id);
        self
    }

    /// Builds and inserts the team entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::team::Model)` - Created team entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::team::Model, DbErr> {
        entity::team::ActiveModel {
            api_team_id: ActiveValue::Set(self.api_team_id),
            name: ActiveValue::Set(self.name),
            code: ActiveValue::Set(None),
            country: ActiveValue::Set(self.country),
            founded: ActiveValue::Set(None),
            national: ActiveValue::Set(false),
            logo: ActiveValue::Set(None),
            venue_id: ActiveValue::Set(self.venue_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a team with default values.
pub async fn create_team(db: &DatabaseConnection) -> Result<entity::team::Model, DbErr> {
    TeamFactory::new(db).build().await
}

/// Creates a team with a specific external id.
pub async fn create_team_with_api_id(
    db: &DatabaseConnection,
    api_team_id: i64,
) -> Result<entity::team::Model, DbErr> {
    TeamFactory::new(db).api_team_id(api_team_id).build().await
}
