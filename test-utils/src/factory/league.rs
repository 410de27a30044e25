//! League factory for creating test league entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test leagues with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let league = LeagueFactory::new(&db)
///     .api_league_id(39)
///     .name("Premier League")
///     .build()
///     .await?;
/// ```
pub struct LeagueFactory<'a> {
    db: &'a DatabaseConnection,
    api_league_id: i64,
    name: String,
    country_id: Option<i32>,
}

impl<'a> LeagueFactory<'a> {
    /// Creates a new LeagueFactory with default values.
    ///
    /// Defaults:
    /// - api_league_id: unique counter value
    /// - name: `"League {id}"`
    /// - country_id: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            api_league_id: id as i64,
            name: format!("League {}", id),
            country_id: None,
        }
    }

    pub fn api_league_id(mut self, api_league_id: i64) -> Self {
        self.api_league_id = api_league_id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn country_id(mut self, country_id: i32) -> Self {
        self.country_id = Some(country_id);
        self
    }

    /// Builds and inserts the league entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::league::Model)` - Created league entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::league::Model, DbErr> {
        entity::league::ActiveModel {
            api_league_id: ActiveValue::Set(self.api_league_id),
            name: ActiveValue::Set(self.name),
            league_type: ActiveValue::Set("League".to_string()),
            logo: ActiveValue::Set(None),
            country_id: ActiveValue::Set(self.country_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a league with default values.
pub async fn create_league(db: &DatabaseConnection) -> Result<entity::league::Model, DbErr> {
    LeagueFactory::new(db).build().await
}
