//! Importers of players with their season statistics, and of leaderboards.

use sea_orm::{ActiveValue::Set, DatabaseConnection};

use crate::server::{
    data::{lookup::ReferenceLookup, upsert::upsert_by_key},
    error::{import::ImportError, AppError},
    model::import::{FailurePolicy, FkMissPolicy, ImportKind, ImportReport},
    service::import::{
        records::{PlayerInfo, PlayerRecord, PlayerStatistics, TopStatRecord},
        runner::{optional, required, RecordImporter},
    },
};

/// Leaderboards imported per league and season.
pub const TOP_STAT_CATEGORIES: [&str; 4] =
    ["topscorers", "topassists", "topyellowcards", "topredcards"];

fn player_model(info: PlayerInfo) -> entity::player::ActiveModel {
    entity::player::ActiveModel {
        api_player_id: Set(info.id),
        name: Set(info.name),
        firstname: Set(info.firstname),
        lastname: Set(info.lastname),
        age: Set(info.age),
        birth_date: Set(info.birth.date),
        birth_place: Set(info.birth.place),
        birth_country: Set(info.birth.country),
        nationality: Set(info.nationality),
        height: Set(info.height),
        weight: Set(info.weight),
        injured: Set(info.injured),
        photo: Set(info.photo),
        ..Default::default()
    }
}

/// Imports players and one season stat row per `statistics` entry.
///
/// Statistics entries whose team or league is not known locally are skipped and
/// counted; the player itself is still written.
pub struct PlayerImporter<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlayerImporter<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }
}

impl RecordImporter for PlayerImporter<'_> {
    type Record = PlayerRecord;

    const KIND: ImportKind = ImportKind::Players;
    const FAILURE: FailurePolicy = FailurePolicy::Collect;
    const FK_MISS: FkMissPolicy = FkMissPolicy::Skip;

    async fn import_record(
        &self,
        record: PlayerRecord,
        report: &mut ImportReport,
    ) -> Result<(), AppError> {
        let lookup = ReferenceLookup::new(self.db);

        let (outcome, player) = upsert_by_key::<entity::prelude::Player, _>(
            self.db,
            &[entity::player::Column::ApiPlayerId],
            player_model(record.player),
        )
        .await?;
        report.record(outcome);

        for raw in record.statistics {
            let stats: PlayerStatistics =
                serde_json::from_value(raw.clone()).map_err(|source| ImportError::Decode {
                    kind: Self::KIND,
                    source,
                })?;

            let Some(season) = stats.league.season else {
                continue;
            };
            let team_id = optional(stats.team.id, |id| lookup.team(id)).await?;
            let league_id = optional(stats.league.id, |id| lookup.league(id)).await?;
            let (Some(team_id), Some(league_id)) = (team_id, league_id) else {
                report.record_missing_reference();
                continue;
            };

            let model = entity::player_season_stat::ActiveModel {
                player_id: Set(player.id),
                team_id: Set(team_id),
                league_id: Set(league_id),
                season: Set(season),
                position: Set(stats.games.position),
                appearances: Set(stats.games.appearences),
                lineups: Set(stats.games.lineups),
                minutes: Set(stats.games.minutes),
                rating: Set(stats.games.rating),
                goals: Set(stats.goals.total),
                assists: Set(stats.goals.assists),
                yellow_cards: Set(stats.cards.yellow),
                red_cards: Set(stats.cards.red),
                statistics: Set(raw),
                ..Default::default()
            };
            upsert_by_key::<entity::prelude::PlayerSeasonStat, _>(
                self.db,
                &[
                    entity::player_season_stat::Column::PlayerId,
                    entity::player_season_stat::Column::TeamId,
                    entity::player_season_stat::Column::LeagueId,
                    entity::player_season_stat::Column::Season,
                ],
                model,
            )
            .await?;
        }

        Ok(())
    }
}

/// Value of a leaderboard entry for its category.
fn category_value(category: &str, stats: &PlayerStatistics) -> Option<i32> {
    match category {
        "topscorers" => stats.goals.total,
        "topassists" => stats.goals.assists,
        "topyellowcards" => stats.cards.yellow,
        "topredcards" => stats.cards.red,
        _ => None,
    }
}

/// Imports leaderboard entries; the ranked player is upserted along the way.
pub struct TopStatImporter<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TopStatImporter<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }
}

impl RecordImporter for TopStatImporter<'_> {
    type Record = TopStatRecord;

    const KIND: ImportKind = ImportKind::TopStats;
    const FAILURE: FailurePolicy = FailurePolicy::Collect;
    const FK_MISS: FkMissPolicy = FkMissPolicy::Skip;

    async fn import_record(
        &self,
        record: TopStatRecord,
        report: &mut ImportReport,
    ) -> Result<(), AppError> {
        let lookup = ReferenceLookup::new(self.db);
        let league_id = required(
            lookup.league(record.league_id).await?,
            "league",
            record.league_id,
        )?;

        let (_, player) = upsert_by_key::<entity::prelude::Player, _>(
            self.db,
            &[entity::player::Column::ApiPlayerId],
            player_model(record.player),
        )
        .await?;

        let stats = record.statistics.first();
        let team_id = optional(stats.and_then(|stats| stats.team.id), |id| {
            lookup.team(id)
        })
        .await?;
        let value = stats
            .and_then(|stats| category_value(&record.category, stats))
            .unwrap_or(0);

        let model = entity::player_top_stat::ActiveModel {
            category: Set(record.category),
            league_id: Set(league_id),
            season: Set(record.season),
            rank: Set(record.rank),
            player_id: Set(player.id),
            team_id: Set(team_id),
            value: Set(value),
            ..Default::default()
        };
        let (outcome, _) = upsert_by_key::<entity::prelude::PlayerTopStat, _>(
            self.db,
            &[
                entity::player_top_stat::Column::Category,
                entity::player_top_stat::Column::LeagueId,
                entity::player_top_stat::Column::Season,
                entity::player_top_stat::Column::PlayerId,
            ],
            model,
        )
        .await?;
        report.record(outcome);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_the_value_of_each_category() {
        let stats: PlayerStatistics = serde_json::from_value(serde_json::json!({
            "goals": {"total": 20, "assists": 5},
            "cards": {"yellow": 3, "red": 1}
        }))
        .unwrap();

        assert_eq!(category_value("topscorers", &stats), Some(20));
        assert_eq!(category_value("topassists", &stats), Some(5));
        assert_eq!(category_value("topyellowcards", &stats), Some(3));
        assert_eq!(category_value("topredcards", &stats), Some(1));
        assert_eq!(category_value("unknown", &stats), None);
    }
}
