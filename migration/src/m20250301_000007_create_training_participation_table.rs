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
                    .table(TrainingParticipation::Table)
                    .if_not_exists()
                    .col(uuid(TrainingParticipation::TrainingId))
                    .col(uuid(TrainingParticipation::StudentId))
                    .primary_key(
                        Index::create()
                            .name("pk_training_participation")
                            .col(TrainingParticipation::TrainingId)
                            .col(TrainingParticipation::StudentId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_training_participation_training_id")
                            .from(
                                TrainingParticipation::Table,
                                TrainingParticipation::TrainingId,
                            )
                            .to(Training::Table, Training::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_training_participation_student_id")
                    .table(TrainingParticipation::Table)
                    .col(TrainingParticipation::StudentId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_training_participation_student_id")
                    .table(TrainingParticipation::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(
                Table::drop()
                    .table(TrainingParticipation::Table)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
pub enum TrainingParticipation {
    Table,
    TrainingId,
    StudentId,
}
