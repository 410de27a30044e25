use sea_orm_migration::{prelude::*, schema::*};

use super::m20260101_000005_create_team_table::Team;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Coach::Table)
                    .if_not_exists()
                    .col(pk_auto(Coach::Id))
                    .col(big_integer_uniq(Coach::ApiCoachId))
                    .col(string(Coach::Name))
                    .col(string_null(Coach::Firstname))
                    .col(string_null(Coach::Lastname))
                    .col(integer_null(Coach::Age))
                    .col(date_null(Coach::BirthDate))
                    .col(string_null(Coach::Nationality))
                    .col(string_null(Coach::Photo))
                    .col(integer_null(Coach::TeamId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_coaches_team_id")
                            .from(Coach::Table, Coach::TeamId)
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
            .drop_table(Table::drop().table(Coach::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Coach {
    #[sea_orm(iden = "coaches")]
    Table,
    Id,
    ApiCoachId,
    Name,
    Firstname,
    Lastname,
    Age,
    BirthDate,
    Nationality,
    Photo,
    TeamId,
}
