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
                    .table(PlayerTopStat::Table)
                    .if_not_exists()
                    .col(pk_auto(PlayerTopStat::Id))
                    .col(string(PlayerTopStat::Category))
                    .col(integer(PlayerTopStat::LeagueId))
                    .col(integer(PlayerTopStat::Season))
                    .col(integer(PlayerTopStat::Rank))
                    .col(integer(PlayerTopStat::PlayerId))
                    .col(integer_null(PlayerTopStat::TeamId))
                    .col(integer(PlayerTopStat::Value))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_player_top_stats_league_id")
                            .from(PlayerTopStat::Table, PlayerTopStat::LeagueId)
                            .to(League::Table, League::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_player_top_stats_player_id")
                            .from(PlayerTopStat::Table, PlayerTopStat::PlayerId)
                            .to(Player::Table, Player::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_player_top_stats_team_id")
                            .from(PlayerTopStat::Table, PlayerTopStat::TeamId)
                            .to(Team::Table, Team::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_player_top_stats_unique")
                            .col(PlayerTopStat::Category)
                            .col(PlayerTopStat::LeagueId)
                            .col(PlayerTopStat::Season)
                            .col(PlayerTopStat::PlayerId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PlayerTopStat::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PlayerTopStat {
    #[sea_orm(iden = "player_top_stats")]
    Table,
    Id,
    Category,
    LeagueId,
    Season,
    Rank,
    PlayerId,
    TeamId,
    Value,
}
