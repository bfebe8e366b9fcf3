use super::*;

/// Tests deleting a course with topics and students.
///
/// Expected: the course, its syllabus and its participation rows are gone while the
/// topics themselves remain
#[tokio::test]
async fn deletes_course_with_dependents() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = SyllabusLocks::new();

    let (creator, course, topics) = factory::helpers::create_course_with_topics(db, 3).await?;
    let student = factory::create_user(db).await?;
    factory::participation::enroll_in_course(db, course.id, student.id).await?;

    let service = CourseService::new(db);
    service.delete(course.id, creator.id, &locks).await?;

    assert!(matches!(
        service.get(course.id).await,
        Err(AppError::NotFound(_))
    ));
    assert!(syllabus_order(db, course.id).await?.is_empty());
    assert!(service.list_joined(student.id).await?.is_empty());
    assert_eq!(locks.len(), 0);

    let topic_service = crate::server::service::topic::TopicService::new(db);
    for topic in topics {
        topic_service.get(topic.id).await?;
    }

    Ok(())
}

/// Tests deleting a course owned by someone else.
///
/// Expected: Err(NotFound) and the course survives
#[tokio::test]
async fn non_owner_cannot_delete() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = SyllabusLocks::new();

    let (_, course) = factory::helpers::create_course_with_creator(db).await?;
    let stranger = factory::create_user(db).await?;

    let service = CourseService::new(db);
    let result = service.delete(course.id, stranger.id, &locks).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    service.get(course.id).await?;

    Ok(())
}
