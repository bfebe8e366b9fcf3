//! Syllabus factory for linking topics to courses at an explicit sequence.
//!
//! The factory writes the row verbatim and does not maintain the dense-sequence
//! invariant; callers are expected to pass consecutive sequences.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Inserts a syllabus row linking `topic_id` into `course_id` at `sequence`.
pub async fn link(
    db: &DatabaseConnection,
    course_id: Uuid,
    topic_id: Uuid,
    sequence: i32,
) -> Result<entity::syllabus::Model, DbErr> {
    entity::syllabus::ActiveModel {
        course_id: ActiveValue::Set(course_id),
        topic_id: ActiveValue::Set(topic_id),
        sequence: ActiveValue::Set(sequence),
    }
    .insert(db)
    .await
}
