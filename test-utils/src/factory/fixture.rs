//! Fixture factory for creating test fixture entities.

use crate::factory::helpers::next_id;
use chrono::{Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test fixtures.
///
/// League and both teams must already exist; see
/// `helpers::create_fixture_with_dependencies` for a one-call setup.
pub struct FixtureFactory<'a> {
    db: &'a DatabaseConnection,
    api_fixture_id: i64,
    league_id: i32,
    season: i32,
    home_team_id: i32,
    away_team_id: i32,
    status_short: String,
    date: chrono::DateTime<Utc>,
}

impl<'a> FixtureFactory<'a> {
    /// Creates a new FixtureFactory with default values.
    ///
    /// Defaults:
    /// - api_fixture_id: unique counter value
    /// - season: `2024`
    /// - status_short: `"NS"` (not started)
    /// - date: one day from now
    pub fn new(db: &'a DatabaseConnection, league_id: i32, home_team_id: i32, away_team_id: i32) -> Self {
        Self {
            db,
            api_fixture_id: next_id() as i64,
            league_id,
            season: 2024,
            home_team_id,
            away_team_id,
            status_short: "NS".to_string(),
            date: Utc::now() + Duration::days(1),
        }
    }

    pub fn api_fixture_id(mut self, api_fixture_id: i64) -> Self {
        self.api_fixture_id = api_fixture_id;
        self
    }

    pub fn season(mut self, season: i32) -> Self {
        self.season = season;
        self
    }

    pub fn status(mut self, status_short: impl Into<String>) -> Self {
        self.status_short = status_short.into();
        self
    }

    pub fn date(mut self, date: chrono::DateTime<Utc>) -> Self {
        self.date = date;
        self
    }

    /// Builds and inserts the fixture entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::fixture::Model)` - Created fixture entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::fixture::Model, DbErr> {
        entity::fixture::ActiveModel {
            api_fixture_id: ActiveValue::Set(self.api_fixture_id),
            league_id: ActiveValue::Set(self.league_id),
            season: ActiveValue::Set(self.season),
            round: ActiveValue::Set(Some("Regular Season - 1".to_string())),
            referee: ActiveValue::Set(None),
            timezone: ActiveValue::Set(Some("UTC".to_string())),
            date: ActiveValue::Set(self.date),
            venue_id: ActiveValue::Set(None),
            status_short: ActiveValue::Set(self.status_short),
            status_long: ActiveValue::Set(None),
            elapsed: ActiveValue::Set(None),
            home_team_id: ActiveValue::Set(self.home_team_id),
            away_team_id: ActiveValue::Set(self.away_team_id),
            home_goals: ActiveValue::Set(None),
            away_goals: ActiveValue::Set(None),
            halftime_home: ActiveValue::Set(None),
            halftime_away: ActiveValue::Set(None),
            fulltime_home: ActiveValue::Set(None),
            fulltime_away: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

#[cfg(test)]
mod tests {
    use crate::{builder::TestBuilder, factory::helpers::create_fixture_with_dependencies};
    use sea_orm::DbErr;

    #[tokio::test]
    async fn creates_fixture_with_dependencies() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_football_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let (league, home, away, fixture) = create_fixture_with_dependencies(db).await?;

        assert_eq!(fixture.league_id, league.id);
        assert_eq!(fixture.home_team_id, home.id);
        assert_eq!(fixture.away_team_id, away.id);
        assert_ne!(home.api_team_id, away.api_team_id);
        assert_eq!(fixture.status_short, "NS");

        Ok(())
    }
}
