use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Venue::Table)
                    .if_not_exists()
                    .col(pk_auto(Venue::Id))
                    .col(big_integer_uniq(Venue::ApiVenueId))
                    .col(string(Venue::Name))
                    .col(string_null(Venue::Address))
                    .col(string_null(Venue::City))
                    .col(string_null(Venue::Country))
                    .col(integer_null(Venue::Capacity))
                    .col(string_null(Venue::Surface))
                    .col(string_null(Venue::Image))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Venue::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Venue {
    #[sea_orm(iden = "venues")]
    Table,
    Id,
    ApiVenueId,
    Name,
    Address,
    City,
    Country,
    Capacity,
    Surface,
    Image,
}
