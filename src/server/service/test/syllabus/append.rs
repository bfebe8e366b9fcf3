use super::*;

/// Tests appending topics to an empty syllabus.
///
/// Expected: each topic lands at the next position, starting from 1
#[tokio::test]
async fn appends_at_next_position() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = SyllabusLocks::new();

    let (creator, course) = factory::helpers::create_course_with_creator(db).await?;
    let first = factory::create_topic(db, creator.id).await?;
    let second = factory::create_topic(db, creator.id).await?;

    let ledger = SyllabusLedger::new(db, &locks);
    let entry = ledger.append(course.id, first.id).await?;
    assert_eq!(entry.sequence, 1);

    let entry = ledger.append(course.id, second.id).await?;
    assert_eq!(entry.sequence, 2);

    assert_eq!(syllabus_order(db, course.id).await?, vec![first.id, second.id]);
    assert_eq!(ledger.count(course.id).await?, 2);

    Ok(())
}

/// Tests appending a topic that is already in the syllabus.
///
/// Expected: Err(Conflict) and the syllabus is unchanged
#[tokio::test]
async fn rejects_duplicate_topic() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = SyllabusLocks::new();

    let (_, course, topics) = factory::helpers::create_course_with_topics(db, 2).await?;

    let result = SyllabusLedger::new(db, &locks)
        .append(course.id, topics[0].id)
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    assert_eq!(syllabus_sequences(db, course.id).await?, vec![1, 2]);

    Ok(())
}

/// Tests appending a topic id that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn rejects_unknown_topic() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = SyllabusLocks::new();

    let (_, course) = factory::helpers::create_course_with_creator(db).await?;

    let result = SyllabusLedger::new(db, &locks)
        .append(course.id, Uuid::new_v4())
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
