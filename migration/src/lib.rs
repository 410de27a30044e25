pub use sea_orm_migration::prelude::*;

mod m20260101_000001_create_country_table;
mod m20260101_000002_create_league_table;
mod m20260101_000003_create_season_table;
mod m20260101_000004_create_venue_table;
mod m20260101_000005_create_team_table;
mod m20260101_000006_create_coach_table;
mod m20260101_000007_create_player_table;
mod m20260101_000008_create_player_season_stat_table;
mod m20260101_000009_create_player_top_stat_table;
mod m20260101_000010_create_fixture_table;
mod m20260101_000011_create_fixture_h2h_table;
mod m20260101_000012_create_fixture_event_table;
mod m20260101_000013_create_lineup_table;
mod m20260101_000014_create_lineup_player_table;
mod m20260101_000015_create_player_fixture_stat_table;
mod m20260101_000016_create_bookmaker_table;
mod m20260101_000017_create_bet_table;
mod m20260101_000018_create_odd_table;
mod m20260101_000019_create_injury_table;
mod m20260101_000020_create_transfer_table;
mod m20260101_000021_create_trophy_table;
mod m20260101_000022_create_sidelined_table;
mod m20260101_000023_create_user_table;
mod m20260101_000024_create_password_reset_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260101_000001_create_country_table::Migration),
            Box::new(m20260101_000002_create_league_table::Migration),
            Box::new(m20260101_000003_create_season_table::Migration),
            Box::new(m20260101_000004_create_venue_table::Migration),
            Box::new(m20260101_000005_create_team_table::Migration),
            Box::new(m20260101_000006_create_coach_table::Migration),
            Box::new(m20260101_000007_create_player_table::Migration),
            Box::new(m20260101_000008_create_player_season_stat_table::Migration),
            Box::new(m20260101_000009_create_player_top_stat_table::Migration),
            Box::new(m20260101_000010_create_fixture_table::Migration),
            Box::new(m20260101_000011_create_fixture_h2h_table::Migration),
            Box::new(m20260101_000012_create_fixture_event_table::Migration),
            Box::new(m20260101_000013_create_lineup_table::Migration),
            Box::new(m20260101_000014_create_lineup_player_table::Migration),
            Box::new(m20260101_000015_create_player_fixture_stat_table::Migration),
            Box::new(m20260101_000016_create_bookmaker_table::Migration),
            Box::new(m20260101_000017_create_bet_table::Migration),
            Box::new(m20260101_000018_create_odd_table::Migration),
            Box::new(m20260101_000019_create_injury_table::Migration),
            Box::new(m20260101_000020_create_transfer_table::Migration),
            Box::new(m20260101_000021_create_trophy_table::Migration),
            Box::new(m20260101_000022_create_sidelined_table::Migration),
            Box::new(m20260101_000023_create_user_table::Migration),
            Box::new(m20260101_000024_create_password_reset_table::Migration),
        ]
    }
}
