use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Bet::Table)
                    .if_not_exists()
                    .col(pk_auto(Bet::Id))
                    .col(big_integer_uniq(Bet::ApiBetId))
                    .col(string(Bet::Name))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Bet::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Bet {
    #[sea_orm(iden = "bets")]
    Table,
    Id,
    ApiBetId,
    Name,
}
