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
                    .table(FixtureEvent::Table)
                    .if_not_exists()
                    .col(pk_auto(FixtureEvent::Id))
                    .col(string_uniq(FixtureEvent::ExternalKey))
                    .col(integer(FixtureEvent::FixtureId))
                    .col(integer_null(FixtureEvent::TeamId))
                    .col(integer_null(FixtureEvent::PlayerId))
                    .col(integer_null(FixtureEvent::AssistPlayerId))
                    .col(integer(FixtureEvent::Elapsed))
                    .col(integer_null(FixtureEvent::Extra))
                    .col(string(FixtureEvent::EventType))
                    .col(string_null(FixtureEvent::Detail))
                    .col(string_null(FixtureEvent::Comments))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_fixture_events_fixture_id")
                            .from(FixtureEvent::Table, FixtureEvent::FixtureId)
                            .to(Fixture::Table, Fixture::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_fixture_events_team_id")
                            .from(FixtureEvent::Table, FixtureEvent::TeamId)
                            .to(Team::Table, Team::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_fixture_events_player")
                            .from(FixtureEvent::Table, FixtureEvent::PlayerId)
                            .to(Player::Table, Player::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_fixture_events_assist_player")
                            .from(FixtureEvent::Table, FixtureEvent::AssistPlayerId)
                            .to(Player::Table, Player::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FixtureEvent::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum FixtureEvent {
    #[sea_orm(iden = "fixture_events")]
    Table,
    Id,
    ExternalKey,
    FixtureId,
    TeamId,
    PlayerId,
    AssistPlayerId,
    Elapsed,
    Extra,
    EventType,
    Detail,
    Comments,
}
