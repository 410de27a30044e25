use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260101_000010_create_fixture_table::Fixture, m20260101_000016_create_bookmaker_table::Bookmaker,
    m20260101_000017_create_bet_table::Bet,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Odd::Table)
                    .if_not_exists()
                    .col(pk_auto(Odd::Id))
                    .col(integer(Odd::FixtureId))
                    .col(integer(Odd::BookmakerId))
                    .col(integer(Odd::BetId))
                    .col(string(Odd::Value))
                    .col(string(Odd::Odd))
                    .col(timestamp_with_time_zone_null(Odd::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_odds_fixture_id")
                            .from(Odd::Table, Odd::FixtureId)
                            .to(Fixture::Table, Fixture::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_odds_bookmaker_id")
                            .from(Odd::Table, Odd::BookmakerId)
                            .to(Bookmaker::Table, Bookmaker::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_odds_bet_id")
                            .from(Odd::Table, Odd::BetId)
                            .to(Bet::Table, Bet::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_odds_unique")
                            .col(Odd::FixtureId)
                            .col(Odd::BookmakerId)
                            .col(Odd::BetId)
                            .col(Odd::Value),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Odd::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Odd {
    #[sea_orm(iden = "odds")]
    Table,
    Id,
    FixtureId,
    BookmakerId,
    BetId,
    Value,
    Odd,
    UpdatedAt,
}
