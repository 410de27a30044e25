use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260101_000002_create_league_table::League, m20260101_000004_create_venue_table::Venue,
    m20260101_000005_create_team_table::Team,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Fixture::Table)
                    .if_not_exists()
                    .col(pk_auto(Fixture::Id))
                    .col(big_integer_uniq(Fixture::ApiFixtureId))
                    .col(integer(Fixture::LeagueId))
                    .col(integer(Fixture::Season))
                    .col(string_null(Fixture::Round))
                    .col(string_null(Fixture::Referee))
                    .col(string_null(Fixture::Timezone))
                    .col(timestamp_with_time_zone(Fixture::Date))
                    .col(integer_null(Fixture::VenueId))
                    .col(string(Fixture::StatusShort))
                    .col(string_null(Fixture::StatusLong))
                    .col(integer_null(Fixture::Elapsed))
                    .col(integer(Fixture::HomeTeamId))
                    .col(integer(Fixture::AwayTeamId))
                    .col(integer_null(Fixture::HomeGoals))
                    .col(integer_null(Fixture::AwayGoals))
                    .col(integer_null(Fixture::HalftimeHome))
                    .col(integer_null(Fixture::HalftimeAway))
                    .col(integer_null(Fixture::FulltimeHome))
                    .col(integer_null(Fixture::FulltimeAway))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_fixtures_league_id")
                            .from(Fixture::Table, Fixture::LeagueId)
                            .to(League::Table, League::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_fixtures_venue_id")
                            .from(Fixture::Table, Fixture::VenueId)
                            .to(Venue::Table, Venue::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_fixtures_home_team")
                            .from(Fixture::Table, Fixture::HomeTeamId)
                            .to(Team::Table, Team::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_fixtures_away_team")
                            .from(Fixture::Table, Fixture::AwayTeamId)
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
            .drop_table(Table::drop().table(Fixture::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Fixture {
    #[sea_orm(iden = "fixtures")]
    Table,
    Id,
    ApiFixtureId,
    LeagueId,
    Season,
    Round,
    Referee,
    Timezone,
    Date,
    VenueId,
    StatusShort,
    StatusLong,
    Elapsed,
    HomeTeamId,
    AwayTeamId,
    HomeGoals,
    AwayGoals,
    HalftimeHome,
    HalftimeAway,
    FulltimeHome,
    FulltimeAway,
}
