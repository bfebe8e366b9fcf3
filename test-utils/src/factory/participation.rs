//! Participation factories for enrolling students directly.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Inserts a course participation row.
pub async fn enroll_in_course(
    db: &DatabaseConnection,
    course_id: Uuid,
    student_id: Uuid,
) -> Result<entity::course_participation::Model, DbErr> {
    entity::course_participation::ActiveModel {
        course_id: ActiveValue::Set(course_id),
        student_id: ActiveValue::Set(student_id),
    }
    .insert(db)
    .await
}

/// Inserts a training participation row.
pub async fn enroll_in_training(
    db: &DatabaseConnection,
    training_id: Uuid,
    student_id: Uuid,
) -> Result<entity::training_participation::Model, DbErr> {
    entity::training_participation::ActiveModel {
        training_id: ActiveValue::Set(training_id),
        student_id: ActiveValue::Set(student_id),
    }
    .insert(db)
    .await
}
