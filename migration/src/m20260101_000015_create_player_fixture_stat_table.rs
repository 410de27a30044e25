use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260101_000005_create_team_table::Team, m20260101_000007_create_player_table::Player,
    m20260101_000010_create_fixture_table::Fixture,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PlayerFixtureStat::Table)
                    .if_not_exists()
                    .col(pk_auto(PlayerFixtureStat::Id))
                    .col(integer(PlayerFixtureStat::FixtureId))
                    .col(integer(PlayerFixtureStat::PlayerId))
                    .col(integer(PlayerFixtureStat::TeamId))
                    .col(integer_null(PlayerFixtureStat::Minutes))
                    .col(string_null(PlayerFixtureStat::Rating))
                    .col(boolean(PlayerFixtureStat::Captain).default(false))
                    .col(boolean(PlayerFixtureStat::Substitute).default(false))
                    .col(integer_null(PlayerFixtureStat::Goals))
                    .col(integer_null(PlayerFixtureStat::Assists))
                    .col(json(PlayerFixtureStat::Statistics))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_player_fixture_stats_fixture_id")
                            .from(PlayerFixtureStat::Table, PlayerFixtureStat::FixtureId)
                            .to(Fixture::Table, Fixture::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_player_fixture_stats_player_id")
                            .from(PlayerFixtureStat::Table, PlayerFixtureStat::PlayerId)
                            .to(Player::Table, Player::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_player_fixture_stats_team_id")
                            .from(PlayerFixtureStat::Table, PlayerFixtureStat::TeamId)
                            .to(Team::Table, Team::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_player_fixture_stats_fixture_player")
                            .col(PlayerFixtureStat::FixtureId)
                            .col(PlayerFixtureStat::PlayerId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PlayerFixtureStat::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PlayerFixtureStat {
    #[sea_orm(iden = "player_fixture_stats")]
    Table,
    Id,
    FixtureId,
    PlayerId,
    TeamId,
    Minutes,
    Rating,
    Captain,
    Substitute,
    Goals,
    Assists,
    Statistics,
}
