use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250301_000002_create_course_table::Course, m20250301_000003_create_topic_table::Topic,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // No unique index on (course_id, sequence): range shifts pass through
        // transient duplicates before the target row is set.
        manager
            .create_table(
                Table::create()
                    .table(Syllabus::Table)
                    .if_not_exists()
                    .col(uuid(Syllabus::CourseId))
                    .col(uuid(Syllabus::TopicId))
                    .col(integer(Syllabus::Sequence))
                    .primary_key(
                        Index::create()
                            .name("pk_syllabus")
                            .col(Syllabus::CourseId)
                            .col(Syllabus::TopicId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_syllabus_course_id")
                            .from(Syllabus::Table, Syllabus::CourseId)
                            .to(Course::Table, Course::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_syllabus_topic_id")
                            .from(Syllabus::Table, Syllabus::TopicId)
                            .to(Topic::Table, Topic::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Syllabus::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Syllabus {
    Table,
    CourseId,
    TopicId,
    Sequence,
}
