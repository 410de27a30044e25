//! Importers of fixtures and the per-fixture data: head-to-head history, events,
//! lineups and player statistics.

use chrono::Utc;
use sea_orm::{ActiveValue::Set, DatabaseConnection, TransactionTrait};
use serde_json::json;

use crate::server::{
    data::{lookup::ReferenceLookup, upsert::upsert_by_key},
    error::{import::ImportError, AppError},
    model::import::{FailurePolicy, FkMissPolicy, ImportKind, ImportReport},
    service::import::{
        records::{
            EventInfo, FixtureEventsRecord, FixtureLineupsRecord, FixturePlayersRecord,
            FixtureRecord, HeadToHeadRecord, PlayerStatistics,
        },
        runner::{key_part, optional, required, RecordImporter},
    },
};

pub struct FixtureImporter<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FixtureImporter<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }
}

impl RecordImporter for FixtureImporter<'_> {
    type Record = FixtureRecord;

    const KIND: ImportKind = ImportKind::Fixtures;
    const FAILURE: FailurePolicy = FailurePolicy::Collect;
    const FK_MISS: FkMissPolicy = FkMissPolicy::Skip;

    async fn import_record(
        &self,
        record: FixtureRecord,
        report: &mut ImportReport,
    ) -> Result<(), AppError> {
        let lookup = ReferenceLookup::new(self.db);

        let league_id = required(
            lookup.league(record.league.id).await?,
            "league",
            record.league.id,
        )?;
        let home_team_id = required(
            lookup.team(record.teams.home.id).await?,
            "team",
            record.teams.home.id,
        )?;
        let away_team_id = required(
            lookup.team(record.teams.away.id).await?,
            "team",
            record.teams.away.id,
        )?;
        let api_venue_id = record.fixture.venue.as_ref().and_then(|venue| venue.id);
        let venue_id = optional(api_venue_id, |id| lookup.venue(id)).await?;

        let fixture = record.fixture;
        let model = entity::fixture::ActiveModel {
            api_fixture_id: Set(fixture.id),
            league_id: Set(league_id),
            season: Set(record.league.season),
            round: Set(record.league.round),
            referee: Set(fixture.referee),
            timezone: Set(fixture.timezone),
            date: Set(fixture.date.with_timezone(&Utc)),
            venue_id: Set(venue_id),
            status_short: Set(fixture.status.short),
            status_long: Set(fixture.status.long),
            elapsed: Set(fixture.status.elapsed),
            home_team_id: Set(home_team_id),
            away_team_id: Set(away_team_id),
            home_goals: Set(record.goals.home),
            away_goals: Set(record.goals.away),
            halftime_home: Set(record.score.halftime.home),
            halftime_away: Set(record.score.halftime.away),
            fulltime_home: Set(record.score.fulltime.home),
            fulltime_away: Set(record.score.fulltime.away),
            ..Default::default()
        };

        let (outcome, _) = upsert_by_key::<entity::prelude::Fixture, _>(
            self.db,
            &[entity::fixture::Column::ApiFixtureId],
            model,
        )
        .await?;
        report.record(outcome);

        Ok(())
    }
}

/// Imports past meetings of the teams of upcoming fixtures.
///
/// Both teams are required; the league is kept only when it is known locally.
pub struct HeadToHeadImporter<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> HeadToHeadImporter<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }
}

impl RecordImporter for HeadToHeadImporter<'_> {
    type Record = HeadToHeadRecord;

    const KIND: ImportKind = ImportKind::HeadToHead;
    const FAILURE: FailurePolicy = FailurePolicy::Collect;
    const FK_MISS: FkMissPolicy = FkMissPolicy::Skip;

    async fn import_record(
        &self,
        record: HeadToHeadRecord,
        report: &mut ImportReport,
    ) -> Result<(), AppError> {
        let lookup = ReferenceLookup::new(self.db);

        let home_team_id = required(
            lookup.team(record.teams.home.id).await?,
            "team",
            record.teams.home.id,
        )?;
        let away_team_id = required(
            lookup.team(record.teams.away.id).await?,
            "team",
            record.teams.away.id,
        )?;
        let league = record.league.unwrap_or_default();
        let league_id = optional(league.id, |id| lookup.league(id)).await?;

        let model = entity::fixture_h2h::ActiveModel {
            api_fixture_id: Set(record.fixture.id),
            league_id: Set(league_id),
            season: Set(league.season),
            date: Set(record.fixture.date.with_timezone(&Utc)),
            status_short: Set(record.fixture.status.short),
            home_team_id: Set(home_team_id),
            away_team_id: Set(away_team_id),
            home_goals: Set(record.goals.home),
            away_goals: Set(record.goals.away),
            ..Default::default()
        };

        let (outcome, _) = upsert_by_key::<entity::prelude::FixtureH2h, _>(
            self.db,
            &[entity::fixture_h2h::Column::ApiFixtureId],
            model,
        )
        .await?;
        report.record(outcome);

        Ok(())
    }
}

/// Natural key of an event: provider fixture id, minute, type, detail, team and player.
fn event_key(api_fixture_id: i64, event: &EventInfo) -> String {
    format!(
        "{}:{}:{}:{}:{}:{}:{}",
        api_fixture_id,
        event.time.elapsed,
        key_part(event.time.extra),
        event.event_type,
        key_part(event.detail.as_deref()),
        key_part(event.team.as_ref().and_then(|team| team.id)),
        key_part(event.player.as_ref().and_then(|player| player.id)),
    )
}

/// Imports the events of one fixture per record, in a transaction.
///
/// Team, player and assist are optional references; the fixture is required.
pub struct EventImporter<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventImporter<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }
}

impl RecordImporter for EventImporter<'_> {
    type Record = FixtureEventsRecord;

    const KIND: ImportKind = ImportKind::Events;
    const FAILURE: FailurePolicy = FailurePolicy::Collect;
    const FK_MISS: FkMissPolicy = FkMissPolicy::Skip;

    async fn import_record(
        &self,
        record: FixtureEventsRecord,
        report: &mut ImportReport,
    ) -> Result<(), AppError> {
        let api_fixture_id = record.fixture.id;
        let fixture_id = required(
            ReferenceLookup::new(self.db).fixture(api_fixture_id).await?,
            "fixture",
            api_fixture_id,
        )?;

        let txn = self.db.begin().await?;
        let lookup = ReferenceLookup::new(&txn);
        let mut tally = ImportReport::new(Self::KIND);

        for event in record.events {
            let external_key = event_key(api_fixture_id, &event);

            let team_id = optional(event.team.and_then(|team| team.id), |id| lookup.team(id))
                .await?;
            let player_id = optional(event.player.and_then(|player| player.id), |id| {
                lookup.player(id)
            })
            .await?;
            let assist_player_id = optional(event.assist.and_then(|assist| assist.id), |id| {
                lookup.player(id)
            })
            .await?;

            let model = entity::fixture_event::ActiveModel {
                external_key: Set(external_key),
                fixture_id: Set(fixture_id),
                team_id: Set(team_id),
                player_id: Set(player_id),
                assist_player_id: Set(assist_player_id),
                elapsed: Set(event.time.elapsed),
                extra: Set(event.time.extra),
                event_type: Set(event.event_type),
                detail: Set(event.detail),
                comments: Set(event.comments),
                ..Default::default()
            };
            let (outcome, _) = upsert_by_key::<entity::prelude::FixtureEvent, _>(
                &txn,
                &[entity::fixture_event::Column::ExternalKey],
                model,
            )
            .await?;
            tally.record(outcome);
        }

        txn.commit().await?;
        report.absorb(&tally);

        Ok(())
    }
}

/// Imports the lineups of one fixture per record, with their players, in a
/// transaction.
///
/// Lineups of unknown teams and lineup entries of unknown players are skipped and
/// counted.
pub struct LineupImporter<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LineupImporter<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }
}

impl RecordImporter for LineupImporter<'_> {
    type Record = FixtureLineupsRecord;

    const KIND: ImportKind = ImportKind::Lineups;
    const FAILURE: FailurePolicy = FailurePolicy::Collect;
    const FK_MISS: FkMissPolicy = FkMissPolicy::Skip;

    async fn import_record(
        &self,
        record: FixtureLineupsRecord,
        report: &mut ImportReport,
    ) -> Result<(), AppError> {
        let fixture_id = required(
            ReferenceLookup::new(self.db)
                .fixture(record.fixture.id)
                .await?,
            "fixture",
            record.fixture.id,
        )?;

        let txn = self.db.begin().await?;
        let lookup = ReferenceLookup::new(&txn);
        let mut tally = ImportReport::new(Self::KIND);

        for lineup in record.lineups {
            let Some(team_id) = lookup.team(lineup.team.id).await? else {
                tally.record_missing_reference();
                continue;
            };
            let coach_id = optional(lineup.coach.and_then(|coach| coach.id), |id| {
                lookup.coach(id)
            })
            .await?;

            let model = entity::lineup::ActiveModel {
                fixture_id: Set(fixture_id),
                team_id: Set(team_id),
                formation: Set(lineup.formation),
                coach_id: Set(coach_id),
                ..Default::default()
            };
            let (outcome, row) = upsert_by_key::<entity::prelude::Lineup, _>(
                &txn,
                &[
                    entity::lineup::Column::FixtureId,
                    entity::lineup::Column::TeamId,
                ],
                model,
            )
            .await?;
            tally.record(outcome);

            let entries = lineup
                .start_xi
                .into_iter()
                .map(|entry| (entry, true))
                .chain(lineup.substitutes.into_iter().map(|entry| (entry, false)));

            for (entry, starter) in entries {
                let player_id = optional(entry.player.id, |id| lookup.player(id)).await?;
                let Some(player_id) = player_id else {
                    tally.record_missing_reference();
                    continue;
                };

                let model = entity::lineup_player::ActiveModel {
                    lineup_id: Set(row.id),
                    player_id: Set(player_id),
                    number: Set(entry.player.number),
                    position: Set(entry.player.pos),
                    grid: Set(entry.player.grid),
                    starter: Set(starter),
                    ..Default::default()
                };
                upsert_by_key::<entity::prelude::LineupPlayer, _>(
                    &txn,
                    &[
                        entity::lineup_player::Column::LineupId,
                        entity::lineup_player::Column::PlayerId,
                    ],
                    model,
                )
                .await?;
            }
        }

        txn.commit().await?;
        report.absorb(&tally);

        Ok(())
    }
}

/// Imports per-fixture player statistics.
///
/// The first statistics entry of each player is stored raw next to the extracted
/// headline numbers.
pub struct PlayerFixtureStatImporter<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlayerFixtureStatImporter<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }
}

impl RecordImporter for PlayerFixtureStatImporter<'_> {
    type Record = FixturePlayersRecord;

    const KIND: ImportKind = ImportKind::PlayerFixtureStats;
    const FAILURE: FailurePolicy = FailurePolicy::Collect;
    const FK_MISS: FkMissPolicy = FkMissPolicy::Skip;

    async fn import_record(
        &self,
        record: FixturePlayersRecord,
        report: &mut ImportReport,
    ) -> Result<(), AppError> {
        let lookup = ReferenceLookup::new(self.db);
        let fixture_id = required(
            lookup.fixture(record.fixture.id).await?,
            "fixture",
            record.fixture.id,
        )?;

        for team in record.players {
            let Some(team_id) = lookup.team(team.team.id).await? else {
                report.record_missing_reference();
                continue;
            };

            for player in team.players {
                let player_id = optional(player.player.id, |id| lookup.player(id)).await?;
                let Some(player_id) = player_id else {
                    report.record_missing_reference();
                    continue;
                };

                let raw = player
                    .statistics
                    .into_iter()
                    .next()
                    .unwrap_or_else(|| json!({}));
                let stats: PlayerStatistics = serde_json::from_value(raw.clone()).map_err(
                    |source| ImportError::Decode {
                        kind: Self::KIND,
                        source,
                    },
                )?;

                let model = entity::player_fixture_stat::ActiveModel {
                    fixture_id: Set(fixture_id),
                    player_id: Set(player_id),
                    team_id: Set(team_id),
                    minutes: Set(stats.games.minutes),
                    rating: Set(stats.games.rating),
                    captain: Set(stats.games.captain.unwrap_or(false)),
                    substitute: Set(stats.games.substitute.unwrap_or(false)),
                    goals: Set(stats.goals.total),
                    assists: Set(stats.goals.assists),
                    statistics: Set(raw),
                    ..Default::default()
                };
                let (outcome, _) = upsert_by_key::<entity::prelude::PlayerFixtureStat, _>(
                    self.db,
                    &[
                        entity::player_fixture_stat::Column::FixtureId,
                        entity::player_fixture_stat::Column::PlayerId,
                    ],
                    model,
                )
                .await?;
                report.record(outcome);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::service::import::records::{EventTime, OptionalRef};

    #[test]
    fn event_key_leaves_absent_parts_empty() {
        let event = EventInfo {
            time: EventTime {
                elapsed: 45,
                extra: Some(2),
            },
            team: Some(OptionalRef { id: Some(33) }),
            player: None,
            assist: None,
            event_type: "Card".to_string(),
            detail: Some("Yellow Card".to_string()),
            comments: None,
        };

        assert_eq!(event_key(1001, &event), "1001:45:2:Card:Yellow Card:33:");
    }
}
