//! Foreign key resolution for the importers.
//!
//! Maps provider identifiers (or natural keys) to local primary keys with a single
//! `SELECT id` per call. `None` means the referenced row has not been imported yet.

use sea_orm::{
    sea_query::SimpleExpr, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, ExprTrait, QueryFilter,
    QuerySelect,
};

pub struct ReferenceLookup<'a, C> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> ReferenceLookup<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    async fn id_where<E: EntityTrait>(
        &self,
        id_column: E::Column,
        filter: SimpleExpr,
    ) -> Result<Option<i32>, DbErr> {
        E::find()
            .select_only()
            .column(id_column)
            .filter(filter)
            .into_tuple::<i32>()
            .one(self.conn)
            .await
    }

    /// Resolves a country by its exact name.
    pub async fn country_by_name(&self, name: &str) -> Result<Option<i32>, DbErr> {
        self.id_where::<entity::prelude::Country>(
            entity::country::Column::Id,
            entity::country::Column::Name.eq(name),
        )
        .await
    }

    pub async fn league(&self, api_league_id: i64) -> Result<Option<i32>, DbErr> {
        self.id_where::<entity::prelude::League>(
            entity::league::Column::Id,
            entity::league::Column::ApiLeagueId.eq(api_league_id),
        )
        .await
    }

    pub async fn team(&self, api_team_id: i64) -> Result<Option<i32>, DbErr> {
        self.id_where::<entity::prelude::Team>(
            entity::team::Column::Id,
            entity::team::Column::ApiTeamId.eq(api_team_id),
        )
        .await
    }

    pub async fn venue(&self, api_venue_id: i64) -> Result<Option<i32>, DbErr> {
        self.id_where::<entity::prelude::Venue>(
            entity::venue::Column::Id,
            entity::venue::Column::ApiVenueId.eq(api_venue_id),
        )
        .await
    }

    pub async fn coach(&self, api_coach_id: i64) -> Result<Option<i32>, DbErr> {
        self.id_where::<entity::prelude::Coach>(
            entity::coach::Column::Id,
            entity::coach::Column::ApiCoachId.eq(api_coach_id),
        )
        .await
    }

    pub async fn player(&self, api_player_id: i64) -> Result<Option<i32>, DbErr> {
        self.id_where::<entity::prelude::Player>(
            entity::player::Column::Id,
            entity::player::Column::ApiPlayerId.eq(api_player_id),
        )
        .await
    }

    pub async fn fixture(&self, api_fixture_id: i64) -> Result<Option<i32>, DbErr> {
        self.id_where::<entity::prelude::Fixture>(
            entity::fixture::Column::Id,
            entity::fixture::Column::ApiFixtureId.eq(api_fixture_id),
        )
        .await
    }

    pub async fn bookmaker(&self, api_bookmaker_id: i64) -> Result<Option<i32>, DbErr> {
        self.id_where::<entity::prelude::Bookmaker>(
            entity::bookmaker::Column::Id,
            entity::bookmaker::Column::ApiBookmakerId.eq(api_bookmaker_id),
        )
        .await
    }

    pub async fn bet(&self, api_bet_id: i64) -> Result<Option<i32>, DbErr> {
        self.id_where::<entity::prelude::Bet>(
            entity::bet::Column::Id,
            entity::bet::Column::ApiBetId.eq(api_bet_id),
        )
        .await
    }

    /// Resolves the lineup of a team in a fixture, both given as local ids.
    pub async fn lineup(&self, fixture_id: i32, team_id: i32) -> Result<Option<i32>, DbErr> {
        self.id_where::<entity::prelude::Lineup>(
            entity::lineup::Column::Id,
            entity::lineup::Column::FixtureId
                .eq(fixture_id)
                .and(entity::lineup::Column::TeamId.eq(team_id)),
        )
        .await
    }
}
