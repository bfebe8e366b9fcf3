//! Syllabus repository.
//!
//! Low-level row operations behind the syllabus ledger. The repository does not keep the
//! sequences of a course dense on its own; `SyllabusLedger` composes these calls inside a
//! transaction to do that.

use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};
use uuid::Uuid;

use crate::server::model::{
    syllabus::{SyllabusEntry, SyllabusTopic},
    topic::Topic,
};

pub struct SyllabusRepository<'a, C: ConnectionTrait = DatabaseConnection> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SyllabusRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn find(
        &self,
        course_id: Uuid,
        topic_id: Uuid,
    ) -> Result<Option<SyllabusEntry>, DbErr> {
        let entity = entity::prelude::Syllabus::find_by_id((course_id, topic_id))
            .one(self.db)
            .await?;

        Ok(entity.map(SyllabusEntry::from_entity))
    }

    /// Number of topics in the course syllabus.
    pub async fn count(&self, course_id: Uuid) -> Result<u64, DbErr> {
        entity::prelude::Syllabus::find()
            .filter(entity::syllabus::Column::CourseId.eq(course_id))
            .count(self.db)
            .await
    }

    pub async fn insert(
        &self,
        course_id: Uuid,
        topic_id: Uuid,
        sequence: i32,
    ) -> Result<SyllabusEntry, DbErr> {
        let entity = entity::syllabus::ActiveModel {
            course_id: ActiveValue::Set(course_id),
            topic_id: ActiveValue::Set(topic_id),
            sequence: ActiveValue::Set(sequence),
        }
        .insert(self.db)
        .await?;

        Ok(SyllabusEntry::from_entity(entity))
    }

    /// Adds `delta` to the sequence of every entry of the course within `from..=to`.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of shifted rows
    pub async fn shift(&self, course_id: Uuid, from: i32, to: i32, delta: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Syllabus::update_many()
            .col_expr(
                entity::syllabus::Column::Sequence,
                Expr::col(entity::syllabus::Column::Sequence).add(delta),
            )
            .filter(entity::syllabus::Column::CourseId.eq(course_id))
            .filter(entity::syllabus::Column::Sequence.between(from, to))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn set_sequence(
        &self,
        course_id: Uuid,
        topic_id: Uuid,
        sequence: i32,
    ) -> Result<(), DbErr> {
        entity::prelude::Syllabus::update_many()
            .col_expr(entity::syllabus::Column::Sequence, Expr::value(sequence))
            .filter(entity::syllabus::Column::CourseId.eq(course_id))
            .filter(entity::syllabus::Column::TopicId.eq(topic_id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn delete(&self, course_id: Uuid, topic_id: Uuid) -> Result<u64, DbErr> {
        let result = entity::prelude::Syllabus::delete_by_id((course_id, topic_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Removes every entry of a course; used when the course itself is deleted.
    pub async fn delete_by_course(&self, course_id: Uuid) -> Result<u64, DbErr> {
        let result = entity::prelude::Syllabus::delete_many()
            .filter(entity::syllabus::Column::CourseId.eq(course_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Ids of every course whose syllabus contains the topic.
    pub async fn course_ids_for_topic(&self, topic_id: Uuid) -> Result<Vec<Uuid>, DbErr> {
        entity::prelude::Syllabus::find()
            .select_only()
            .column(entity::syllabus::Column::CourseId)
            .filter(entity::syllabus::Column::TopicId.eq(topic_id))
            .into_tuple()
            .all(self.db)
            .await
    }

    /// Sequences of the course in ascending order.
    #[cfg(test)]
    pub async fn sequences(&self, course_id: Uuid) -> Result<Vec<i32>, DbErr> {
        entity::prelude::Syllabus::find()
            .select_only()
            .column(entity::syllabus::Column::Sequence)
            .filter(entity::syllabus::Column::CourseId.eq(course_id))
            .order_by_asc(entity::syllabus::Column::Sequence)
            .into_tuple()
            .all(self.db)
            .await
    }

    /// Topics of the course ordered by sequence.
    pub async fn list_topics(&self, course_id: Uuid) -> Result<Vec<SyllabusTopic>, DbErr> {
        let rows = entity::prelude::Syllabus::find()
            .filter(entity::syllabus::Column::CourseId.eq(course_id))
            .order_by_asc(entity::syllabus::Column::Sequence)
            .find_also_related(entity::prelude::Topic)
            .all(self.db)
            .await?;

        rows.into_iter()
            .map(|(entry, topic)| {
                let topic = topic.ok_or_else(|| {
                    DbErr::RecordNotFound(format!(
                        "Topic {} referenced by course {} not found",
                        entry.topic_id, entry.course_id
                    ))
                })?;

                Ok(SyllabusTopic {
                    sequence: entry.sequence,
                    topic: Topic::from_entity(topic),
                })
            })
            .collect()
    }
}
