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
                    .table(Trophy::Table)
                    .if_not_exists()
                    .col(pk_auto(Trophy::Id))
                    .col(string_uniq(Trophy::ExternalKey))
                    .col(integer_null(Trophy::PlayerId))
                    .col(integer_null(Trophy::CoachId))
                    .col(string(Trophy::League))
                    .col(string_null(Trophy::Country))
                    .col(string_null(Trophy::Season))
                    .col(string_null(Trophy::Place))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_trophies_player_id")
                            .from(Trophy::Table, Trophy::PlayerId)
                            .to(Player::Table, Player::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_trophies_coach_id")
                            .from(Trophy::Table, Trophy::CoachId)
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
            .drop_table(Table::drop().table(Trophy::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Trophy {
    #[sea_orm(iden = "trophies")]
    Table,
    Id,
    ExternalKey,
    PlayerId,
    CoachId,
    League,
    Country,
    Season,
    Place,
}
