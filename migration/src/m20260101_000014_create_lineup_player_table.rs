use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260101_000007_create_player_table::Player, m20260101_000013_create_lineup_table::Lineup,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LineupPlayer::Table)
                    .if_not_exists()
                    .col(pk_auto(LineupPlayer::Id))
                    .col(integer(LineupPlayer::LineupId))
                    .col(integer(LineupPlayer::PlayerId))
                    .col(integer_null(LineupPlayer::Number))
                    .col(string_null(LineupPlayer::Position))
                    .col(string_null(LineupPlayer::Grid))
                    .col(boolean(LineupPlayer::Starter))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_lineup_players_lineup_id")
                            .from(LineupPlayer::Table, LineupPlayer::LineupId)
                            .to(Lineup::Table, Lineup::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_lineup_players_player_id")
                            .from(LineupPlayer::Table, LineupPlayer::PlayerId)
                            .to(Player::Table, Player::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_lineup_players_lineup_player")
                            .col(LineupPlayer::LineupId)
                            .col(LineupPlayer::PlayerId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LineupPlayer::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum LineupPlayer {
    #[sea_orm(iden = "lineup_players")]
    Table,
    Id,
    LineupId,
    PlayerId,
    Number,
    Position,
    Grid,
    Starter,
}
