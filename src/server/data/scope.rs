//! Queries that decide which upstream requests an importer makes.
//!
//! Several provider endpoints are per team, per fixture or per player. These queries
//! list the locally known parents so the importer can fan out over them.

use std::collections::{BTreeSet, HashMap};

use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};

/// Fixture statuses after which events, lineups and player stats are final.
pub const FINISHED_STATUSES: [&str; 3] = ["FT", "AET", "PEN"];

/// Status of fixtures that have not started.
pub const NOT_STARTED_STATUS: &str = "NS";

pub struct ImportScopeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ImportScopeRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Provider ids of every known team, ascending.
    pub async fn team_api_ids(&self) -> Result<Vec<i64>, DbErr> {
        entity::prelude::Team::find()
            .select_only()
            .column(entity::team::Column::ApiTeamId)
            .order_by_asc(entity::team::Column::ApiTeamId)
            .into_tuple::<i64>()
            .all(self.db)
            .await
    }

    /// Distinct countries of the known teams, sorted by name.
    pub async fn team_countries(&self) -> Result<Vec<String>, DbErr> {
        let countries = entity::prelude::Team::find()
            .select_only()
            .column(entity::team::Column::Country)
            .filter(entity::team::Column::Country.is_not_null())
            .into_tuple::<Option<String>>()
            .all(self.db)
            .await?;

        Ok(countries
            .into_iter()
            .flatten()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect())
    }

    pub async fn player_api_ids(&self) -> Result<Vec<i64>, DbErr> {
        entity::prelude::Player::find()
            .select_only()
            .column(entity::player::Column::ApiPlayerId)
            .order_by_asc(entity::player::Column::ApiPlayerId)
            .into_tuple::<i64>()
            .all(self.db)
            .await
    }

    pub async fn coach_api_ids(&self) -> Result<Vec<i64>, DbErr> {
        entity::prelude::Coach::find()
            .select_only()
            .column(entity::coach::Column::ApiCoachId)
            .order_by_asc(entity::coach::Column::ApiCoachId)
            .into_tuple::<i64>()
            .all(self.db)
            .await
    }

    /// Provider ids of finished fixtures, optionally restricted to one season.
    ///
    /// # Arguments
    /// - `season` - Season year filter; `None` returns every finished fixture
    ///
    /// # Returns
    /// - `Ok(Vec<i64>)` - Provider fixture ids, ascending
    /// - `Err(DbErr)` - Database error during query
    pub async fn finished_fixture_api_ids(&self, season: Option<i32>) -> Result<Vec<i64>, DbErr> {
        let mut query = entity::prelude::Fixture::find()
            .select_only()
            .column(entity::fixture::Column::ApiFixtureId)
            .filter(entity::fixture::Column::StatusShort.is_in(FINISHED_STATUSES));

        if let Some(season) = season {
            query = query.filter(entity::fixture::Column::Season.eq(season));
        }

        query
            .order_by_asc(entity::fixture::Column::ApiFixtureId)
            .into_tuple::<i64>()
            .all(self.db)
            .await
    }

    /// Provider team id pairs of the fixtures that have not started yet.
    ///
    /// Each unordered pair is returned once, lower id first.
    pub async fn upcoming_fixture_pairs(&self) -> Result<Vec<(i64, i64)>, DbErr> {
        let fixtures = entity::prelude::Fixture::find()
            .select_only()
            .column(entity::fixture::Column::HomeTeamId)
            .column(entity::fixture::Column::AwayTeamId)
            .filter(entity::fixture::Column::StatusShort.eq(NOT_STARTED_STATUS))
            .into_tuple::<(i32, i32)>()
            .all(self.db)
            .await?;

        if fixtures.is_empty() {
            return Ok(Vec::new());
        }

        let teams: HashMap<i32, i64> = entity::prelude::Team::find()
            .select_only()
            .column(entity::team::Column::Id)
            .column(entity::team::Column::ApiTeamId)
            .into_tuple::<(i32, i64)>()
            .all(self.db)
            .await?
            .into_iter()
            .collect();

        let pairs: BTreeSet<(i64, i64)> = fixtures
            .into_iter()
            .filter_map(|(home, away)| {
                let home = *teams.get(&home)?;
                let away = *teams.get(&away)?;
                Some((home.min(away), home.max(away)))
            })
            .collect();

        Ok(pairs.into_iter().collect())
    }
}
