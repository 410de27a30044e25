use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260101_000005_create_team_table::Team, m20260101_000006_create_coach_table::Coach,
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
                    .table(Lineup::Table)
                    .if_not_exists()
                    .col(pk_auto(Lineup::Id))
                    .col(integer(Lineup::FixtureId))
                    .col(integer(Lineup::TeamId))
                    .col(string_null(Lineup::Formation))
                    .col(integer_null(Lineup::CoachId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_lineups_fixture_id")
                            .from(Lineup::Table, Lineup::FixtureId)
                            .to(Fixture::Table, Fixture::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_lineups_team_id")
                            .from(Lineup::Table, Lineup::TeamId)
                            .to(Team::Table, Team::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_lineups_coach_id")
                            .from(Lineup::Table, Lineup::CoachId)
                            .to(Coach::Table, Coach::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_lineups_fixture_team")
                            .col(Lineup::FixtureId)
                            .col(Lineup::TeamId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Lineup::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Lineup {
    #[sea_orm(iden = "lineups")]
    Table,
    Id,
    FixtureId,
    TeamId,
    Formation,
    CoachId,
}
