use sea_orm_migration::{prelude::*, schema::*};

use super::m20250301_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Training::Table)
                    .if_not_exists()
                    .col(uuid(Training::Id).primary_key())
                    .col(string(Training::Name))
                    .col(big_integer(Training::Price))
                    .col(text(Training::Description))
                    .col(uuid(Training::CreatorId))
                    .col(
                        timestamp_with_time_zone(Training::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Training::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_training_creator_id")
                            .from(Training::Table, Training::CreatorId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Training::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Training {
    Table,
    Id,
    Name,
    Price,
    Description,
    CreatorId,
    CreatedAt,
    UpdatedAt,
}
