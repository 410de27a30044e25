use sea_orm_migration::{prelude::*, schema::*};

use super::m20260101_000004_create_venue_table::Venue;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Team::Table)
                    .if_not_exists()
                    .col(pk_auto(Team::Id))
                    .col(big_integer_uniq(Team::ApiTeamId))
                    .col(string(Team::Name))
                    .col(string_null(Team::Code))
                    .col(string_null(Team::Country))
                    .col(integer_null(Team::Founded))
                    .col(boolean(Team::National).default(false))
                    .col(string_null(Team::Logo))
                    .col(integer_null(Team::VenueId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_teams_info_venue_id")
                            .from(Team::Table, Team::VenueId)
                            .to(Venue::Table, Venue::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Team::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Team {
    #[sea_orm(iden = "teams_info")]
    Table,
    Id,
    ApiTeamId,
    Name,
    Code,
    Country,
    Founded,
    National,
    Logo,
    VenueId,
}
