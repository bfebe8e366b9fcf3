//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique names in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user and a course owned by that user.
///
/// # Returns
/// - `Ok((creator, course))` - Created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_course_with_creator(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::course::Model), DbErr> {
    let creator = crate::factory::user::create_user(db).await?;
    let course = crate::factory::course::create_course(db, creator.id).await?;

    Ok((creator, course))
}

/// Creates a course with `count` topics linked at sequences `1..=count`.
///
/// Topics are returned in syllabus order, so `topics[i]` sits at sequence `i + 1`.
///
/// # Returns
/// - `Ok((creator, course, topics))` - Created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_course_with_topics(
    db: &DatabaseConnection,
    count: usize,
) -> Result<
    (
        entity::user::Model,
        entity::course::Model,
        Vec<entity::topic::Model>,
    ),
    DbErr,
> {
    let (creator, course) = create_course_with_creator(db).await?;

    let mut topics = Vec::with_capacity(count);
    for index in 0..count {
        let topic = crate::factory::topic::create_topic(db, creator.id).await?;
        crate::factory::syllabus::link(db, course.id, topic.id, index as i32 + 1).await?;
        topics.push(topic);
    }

    Ok((creator, course, topics))
}

/// Creates a user and a training owned by that user.
///
/// # Returns
/// - `Ok((creator, training))` - Created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_training_with_creator(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::training::Model), DbErr> {
    let creator = crate::factory::user::create_user(db).await?;
    let training = crate::factory::training::create_training(db, creator.id).await?;

    Ok((creator, training))
}
