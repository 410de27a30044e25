use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260101_000002_create_league_table::League, m20260101_000005_create_team_table::Team,
    m20260101_000007_create_player_table::Player, m20260101_000010_create_fixture_table::Fixture,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Injury::Table)
                    .if_not_exists()
                    .col(pk_auto(Injury::Id))
                    .col(string_uniq(Injury::ExternalKey))
                    .col(integer(Injury::PlayerId))
                    .col(integer(Injury::TeamId))
                    .col(integer_null(Injury::FixtureId))
                    .col(integer_null(Injury::LeagueId))
                    .col(integer_null(Injury::Season))
                    .col(string_null(Injury::InjuryType))
                    .col(string_null(Injury::Reason))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_injuries_player_id")
                            .from(Injury::Table, Injury::PlayerId)
                            .to(Player::Table, Player::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_injuries_team_id")
                            .from(Injury::Table, Injury::TeamId)
                            .to(Team::Table, Team::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_injuries_fixture_id")
                            .from(Injury::Table, Injury::FixtureId)
                            .to(Fixture::Table, Fixture::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_injuries_league_id")
                            .from(Injury::Table, Injury::LeagueId)
                            .to(League::Table, League::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Injury::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Injury {
    #[sea_orm(iden = "injuries")]
    Table,
    Id,
    ExternalKey,
    PlayerId,
    TeamId,
    FixtureId,
    LeagueId,
    Season,
    InjuryType,
    Reason,
}
