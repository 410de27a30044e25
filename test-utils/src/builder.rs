use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Add entity tables in dependency order, then call `build()` to create the
/// in-memory SQLite database.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Country, League};
///
/// let test = TestBuilder::new()
///     .with_table(Country)
///     .with_table(League)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the entity using SQLite syntax. Tables
    /// with foreign keys should be added after the tables they reference.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity to create the table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the core reference tables: countries, leagues, seasons, venues, teams,
    /// coaches and players.
    pub fn with_reference_tables(self) -> Self {
        self.with_table(Country)
            .with_table(League)
            .with_table(Season)
            .with_table(Venue)
            .with_table(Team)
            .with_table(Coach)
            .with_table(Player)
    }

    /// Adds every provider-sourced table in dependency order.
    ///
    /// Use this for importer and resource tests that touch more than one entity
    /// family. Does not include the account tables; see `with_auth_tables()`.
    pub fn with_football_tables(self) -> Self {
        self.with_reference_tables()
            .with_table(PlayerSeasonStat)
            .with_table(PlayerTopStat)
            .with_table(Fixture)
            .with_table(FixtureH2h)
            .with_table(FixtureEvent)
            .with_table(Lineup)
            .with_table(LineupPlayer)
            .with_table(PlayerFixtureStat)
            .with_table(Bookmaker)
            .with_table(Bet)
            .with_table(Odd)
            .with_table(Injury)
            .with_table(Transfer)
            .with_table(Trophy)
            .with_table(Sidelined)
    }

    /// Adds the `users` and `password_resets` tables.
    pub fn with_auth_tables(self) -> Self {
        self.with_table(User).with_table(PasswordReset)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Test context with database and tables ready
    /// - `Err(TestError::Database)` - Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
