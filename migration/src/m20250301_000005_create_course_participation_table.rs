use sea_orm_migration::{prelude::*, schema::*};

use super::m20250301_000002_create_course_table::Course;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CourseParticipation::Table)
                    .if_not_exists()
                    .col(uuid(CourseParticipation::CourseId))
                    .col(uuid(CourseParticipation::StudentId))
                    .primary_key(
                        Index::create()
                            .name("pk_course_participation")
                            .col(CourseParticipation::CourseId)
                            .col(CourseParticipation::StudentId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_course_participation_course_id")
                            .from(CourseParticipation::Table, CourseParticipation::CourseId)
                            .to(Course::Table, Course::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_course_participation_student_id")
                    .table(CourseParticipation::Table)
                    .col(CourseParticipation::StudentId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_course_participation_student_id")
                    .table(CourseParticipation::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(CourseParticipation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CourseParticipation {
    Table,
    CourseId,
    StudentId,
}
