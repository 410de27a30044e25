use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260101_000005_create_team_table::Team, m20260101_000007_create_player_table::Player,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Transfer::Table)
                    .if_not_exists()
                    .col(pk_auto(Transfer::Id))
                    .col(string_uniq(Transfer::ExternalKey))
                    .col(integer(Transfer::PlayerId))
                    .col(date_null(Transfer::Date))
                    .col(string_null(Transfer::TransferType))
                    .col(integer_null(Transfer::TeamInId))
                    .col(integer_null(Transfer::TeamOutId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_transfers_player_id")
                            .from(Transfer::Table, Transfer::PlayerId)
                            .to(Player::Table, Player::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_transfers_team_in")
                            .from(Transfer::Table, Transfer::TeamInId)
                            .to(Team::Table, Team::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_transfers_team_out")
                            .from(Transfer::Table, Transfer::TeamOutId)
                            .to(Team::Table, Team::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Transfer::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Transfer {
    #[sea_orm(iden = "transfers")]
    Table,
    Id,
    ExternalKey,
    PlayerId,
    Date,
    TransferType,
    TeamInId,
    TeamOutId,
}
