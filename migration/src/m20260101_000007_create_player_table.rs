use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Player::Table)
                    .if_not_exists()
                    .col(pk_auto(Player::Id))
                    .col(big_integer_uniq(Player::ApiPlayerId))
                    .col(string(Player::Name))
                    .col(string_null(Player::Firstname))
                    .col(string_null(Player::Lastname))
                    .col(integer_null(Player::Age))
                    .col(date_null(Player::BirthDate))
                    .col(string_null(Player::BirthPlace))
                    .col(string_null(Player::BirthCountry))
                    .col(string_null(Player::Nationality))
                    .col(string_null(Player::Height))
                    .col(string_null(Player::Weight))
                    .col(boolean(Player::Injured).default(false))
                    .col(string_null(Player::Photo))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Player::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Player {
    #[sea_orm(iden = "players")]
    Table,
    Id,
    ApiPlayerId,
    Name,
    Firstname,
    Lastname,
    Age,
    BirthDate,
    BirthPlace,
    BirthCountry,
    Nationality,
    Height,
    Weight,
    Injured,
    Photo,
}
