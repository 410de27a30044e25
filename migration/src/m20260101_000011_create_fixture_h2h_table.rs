use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260101_000002_create_league_table::League, m20260101_000005_create_team_table::Team,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FixtureH2h::Table)
                    .if_not_exists()
                    .col(pk_auto(FixtureH2h::Id))
                    .col(big_integer_uniq(FixtureH2h::ApiFixtureId))
                    .col(integer_null(FixtureH2h::LeagueId))
                    .col(integer_null(FixtureH2h::Season))
                    .col(timestamp_with_time_zone(FixtureH2h::Date))
                    .col(string(FixtureH2h::StatusShort))
                    .col(integer(FixtureH2h::HomeTeamId))
                    .col(integer(FixtureH2h::AwayTeamId))
                    .col(integer_null(FixtureH2h::HomeGoals))
                    .col(integer_null(FixtureH2h::AwayGoals))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_fixtures_h2h_league_id")
                            .from(FixtureH2h::Table, FixtureH2h::LeagueId)
                            .to(League::Table, League::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_fixtures_h2h_home_team")
                            .from(FixtureH2h::Table, FixtureH2h::HomeTeamId)
                            .to(Team::Table, Team::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_fixtures_h2h_away_team")
                            .from(FixtureH2h::Table, FixtureH2h::AwayTeamId)
                            .to(Team::Table, Team::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FixtureH2h::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum FixtureH2h {
    #[sea_orm(iden = "fixtures_h2h")]
    Table,
    Id,
    ApiFixtureId,
    LeagueId,
    Season,
    Date,
    StatusShort,
    HomeTeamId,
    AwayTeamId,
    HomeGoals,
    AwayGoals,
}
