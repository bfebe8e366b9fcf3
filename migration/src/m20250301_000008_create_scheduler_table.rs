use sea_orm_migration::{prelude::*, schema::*};

use super::m20250301_000006_create_training_table::Training;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Scheduler::Table)
                    .if_not_exists()
                    .col(uuid(Scheduler::Id).primary_key())
                    .col(uuid_uniq(Scheduler::TrainingId))
                    .col(json_null(Scheduler::Monday))
                    .col(json_null(Scheduler::Tuesday))
                    .col(json_null(Scheduler::Wednesday))
                    .col(json_null(Scheduler::Thursday))
                    .col(json_null(Scheduler::Friday))
                    .col(json_null(Scheduler::Saturday))
                    .col(json_null(Scheduler::Sunday))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_scheduler_training_id")
                            .from(Scheduler::Table, Scheduler::TrainingId)
                            .to(Training::Table, Training::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Scheduler::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Scheduler {
    Table,
    Id,
    TrainingId,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}
