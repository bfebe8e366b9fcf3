use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{error::AppError, service::syllabus::{SyllabusLedger, SyllabusLocks}};

mod participation;
mod syllabus;
mod topic;
mod training;

/// Topic ids of a course in syllabus order.
async fn syllabus_order(db: &DatabaseConnection, course_id: Uuid) -> Result<Vec<Uuid>, AppError> {
    let locks = SyllabusLocks::new();
    let topics = SyllabusLedger::new(db, &locks).list(course_id).await?;

    Ok(topics.into_iter().map(|entry| entry.topic.id).collect())
}

/// Sequences of a course in syllabus order.
async fn syllabus_sequences(db: &DatabaseConnection, course_id: Uuid) -> Result<Vec<i32>, AppError> {
    let locks = SyllabusLocks::new();
    let topics = SyllabusLedger::new(db, &locks).list(course_id).await?;

    Ok(topics.into_iter().map(|entry| entry.sequence).collect())
}
