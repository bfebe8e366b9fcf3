use super::*;

/// Tests removing a topic from the middle of the syllabus.
///
/// Expected: remaining topics keep their relative order at positions 1..N-1
#[tokio::test]
async fn closes_gap_in_middle() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = SyllabusLocks::new();

    let (_, course, t) = factory::helpers::create_course_with_topics(db, 5).await?;

    SyllabusLedger::new(db, &locks)
        .remove(course.id, t[2].id)
        .await?;

    assert_eq!(
        syllabus_order(db, course.id).await?,
        vec![t[0].id, t[1].id, t[3].id, t[4].id]
    );
    assert_eq!(syllabus_sequences(db, course.id).await?, vec![1, 2, 3, 4]);

    Ok(())
}

/// Tests removing the last topic.
///
/// Expected: no other entry moves
#[tokio::test]
async fn removes_last_entry() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = SyllabusLocks::new();

    let (_, course, t) = factory::helpers::create_course_with_topics(db, 3).await?;

    SyllabusLedger::new(db, &locks)
        .remove(course.id, t[2].id)
        .await?;

    assert_eq!(syllabus_order(db, course.id).await?, vec![t[0].id, t[1].id]);
    assert_eq!(syllabus_sequences(db, course.id).await?, vec![1, 2]);

    Ok(())
}

/// Tests removing a topic that is not in the syllabus.
///
/// Expected: Err(NotFound) and the syllabus is unchanged
#[tokio::test]
async fn unknown_entry_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = SyllabusLocks::new();

    let (_, course, _) = factory::helpers::create_course_with_topics(db, 2).await?;

    let result = SyllabusLedger::new(db, &locks)
        .remove(course.id, Uuid::new_v4())
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert_eq!(syllabus_sequences(db, course.id).await?, vec![1, 2]);

    Ok(())
}

/// Tests deleting a topic placed in two courses.
///
/// Expected: each affected syllabus stays dense, the topic row is gone and the count of
/// courses is returned
#[tokio::test]
async fn delete_topic_compacts_every_syllabus() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = SyllabusLocks::new();

    let (creator, first, t) = factory::helpers::create_course_with_topics(db, 3).await?;
    let second = factory::create_course(db, creator.id).await?;
    factory::syllabus::link(db, second.id, t[0].id, 1).await?;
    factory::syllabus::link(db, second.id, t[2].id, 2).await?;

    let removed = SyllabusLedger::new(db, &locks)
        .delete_topic(t[0].id)
        .await?;

    assert_eq!(removed, 2);
    assert_eq!(syllabus_order(db, first.id).await?, vec![t[1].id, t[2].id]);
    assert_eq!(syllabus_sequences(db, first.id).await?, vec![1, 2]);
    assert_eq!(syllabus_order(db, second.id).await?, vec![t[2].id]);
    assert_eq!(syllabus_sequences(db, second.id).await?, vec![1]);
    assert!(TopicRepository::new(db).find_by_id(t[0].id).await?.is_none());
    assert_eq!(locks.len(), 0);

    Ok(())
}

/// Tests deleting a topic that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn delete_unknown_topic_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = SyllabusLocks::new();

    let result = SyllabusLedger::new(db, &locks)
        .delete_topic(Uuid::new_v4())
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
