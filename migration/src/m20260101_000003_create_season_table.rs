use sea_orm_migration::{prelude::*, schema::*};

use super::m20260101_000002_create_league_table::League;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Season::Table)
                    .if_not_exists()
                    .col(pk_auto(Season::Id))
                    .col(integer(Season::LeagueId))
                    .col(integer(Season::Year))
                    .col(date_null(Season::StartDate))
                    .col(date_null(Season::EndDate))
                    .col(boolean(Season::Current).default(false))
                    .col(json_null(Season::Coverage))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_seasons_league_id")
                            .from(Season::Table, Season::LeagueId)
                            .to(League::Table, League::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_seasons_league_year")
                            .col(Season::LeagueId)
                            .col(Season::Year),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Season::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Season {
    #[sea_orm(iden = "seasons")]
    Table,
    Id,
    LeagueId,
    Year,
    StartDate,
    EndDate,
    Current,
    Coverage,
}
