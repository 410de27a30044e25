use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Bookmaker::Table)
                    .if_not_exists()
                    .col(pk_auto(Bookmaker::Id))
                    .col(big_integer_uniq(Bookmaker::ApiBookmakerId))
                    .col(string(Bookmaker::Name))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Bookmaker::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Bookmaker {
    #[sea_orm(iden = "bookmakers")]
    Table,
    Id,
    ApiBookmakerId,
    Name,
}
