use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260101_000006_create_coach_table::Coach, m20260101_000007_create_player_table::Player,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Sidelined::Table)
                    .if_not_exists()
                    .col(pk_auto(Sidelined::Id))
                    .col(string_uniq(Sidelined::ExternalKey))
                    .col(integer_null(Sidelined::PlayerId))
                    .col(integer_null(Sidelined::CoachId))
                    .col(string(Sidelined::SidelinedType))
                    .col(date_null(Sidelined::StartDate))
                    .col(date_null(Sidelined::EndDate))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sidelined_player_id")
                            .from(Sidelined::Table, Sidelined::PlayerId)
                            .to(Player::Table, Player::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sidelined_coach_id")
                            .from(Sidelined::Table, Sidelined::CoachId)
                            .to(Coach::Table, Coach::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Sidelined::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Sidelined {
    #[sea_orm(iden = "sidelined")]
    Table,
    Id,
    ExternalKey,
    PlayerId,
    CoachId,
    SidelinedType,
    StartDate,
    EndDate,
}
