use sea_orm_migration::{prelude::*, schema::*};

use super::m20260101_000001_create_country_table::Country;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(League::Table)
                    .if_not_exists()
                    .col(pk_auto(League::Id))
                    .col(big_integer_uniq(League::ApiLeagueId))
                    .col(string(League::Name))
                    .col(string(League::LeagueType))
                    .col(string_null(League::Logo))
                    .col(integer_null(League::CountryId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_leagues_country_id")
                            .from(League::Table, League::CountryId)
                            .to(Country::Table, Country::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(League::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum League {
    #[sea_orm(iden = "leagues")]
    Table,
    Id,
    ApiLeagueId,
    Name,
    LeagueType,
    Logo,
    CountryId,
}
