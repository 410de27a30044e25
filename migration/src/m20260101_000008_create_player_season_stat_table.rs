use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260101_000002_create_league_table::League, m20260101_000005_create_team_table::Team,
    m20260101_000007_create_player_table::Player,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PlayerSeasonStat::Table)
                    .if_not_exists()
                    .col(pk_auto(PlayerSeasonStat::Id))
                    .col(integer(PlayerSeasonStat::PlayerId))
                    .col(integer(PlayerSeasonStat::TeamId))
                    .col(integer(PlayerSeasonStat::LeagueId))
                    .col(integer(PlayerSeasonStat::Season))
                    .col(string_null(PlayerSeasonStat::Position))
                    .col(integer_null(PlayerSeasonStat::Appearances))
                    .col(integer_null(PlayerSeasonStat::Lineups))
                    .col(integer_null(PlayerSeasonStat::Minutes))
                    .col(string_null(PlayerSeasonStat::Rating))
                    .col(integer_null(PlayerSeasonStat::Goals))
                    .col(integer_null(PlayerSeasonStat::Assists))
                    .col(integer_null(PlayerSeasonStat::YellowCards))
                    .col(integer_null(PlayerSeasonStat::RedCards))
                    .col(json(PlayerSeasonStat::Statistics))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_player_season_stats_player_id")
                            .from(PlayerSeasonStat::Table, PlayerSeasonStat::PlayerId)
                            .to(Player::Table, Player::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_player_season_stats_team_id")
                            .from(PlayerSeasonStat::Table, PlayerSeasonStat::TeamId)
                            .to(Team::Table, Team::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_player_season_stats_league_id")
                            .from(PlayerSeasonStat::Table, PlayerSeasonStat::LeagueId)
                            .to(League::Table, League::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_player_season_stats_unique")
                            .col(PlayerSeasonStat::PlayerId)
                            .col(PlayerSeasonStat::TeamId)
                            .col(PlayerSeasonStat::LeagueId)
                            .col(PlayerSeasonStat::Season),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PlayerSeasonStat::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PlayerSeasonStat {
    #[sea_orm(iden = "player_season_stats")]
    Table,
    Id,
    PlayerId,
    TeamId,
    LeagueId,
    Season,
    Position,
    Appearances,
    Lineups,
    Minutes,
    Rating,
    Goals,
    Assists,
    YellowCards,
    RedCards,
    Statistics,
}
