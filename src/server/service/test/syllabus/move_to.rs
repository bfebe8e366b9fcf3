use super::*;

/// Tests moving a topic forward.
///
/// Moving the topic at position 2 to position 4 in a syllabus of five.
///
/// Expected: order becomes 1, 3, 4, 2, 5 with dense positions
#[tokio::test]
async fn moves_forward() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = SyllabusLocks::new();

    let (_, course, t) = factory::helpers::create_course_with_topics(db, 5).await?;

    let entry = SyllabusLedger::new(db, &locks)
        .move_to(course.id, t[1].id, 4)
        .await?;

    assert_eq!(entry.sequence, 4);
    assert_eq!(
        syllabus_order(db, course.id).await?,
        vec![t[0].id, t[2].id, t[3].id, t[1].id, t[4].id]
    );
    assert_eq!(syllabus_sequences(db, course.id).await?, vec![1, 2, 3, 4, 5]);

    Ok(())
}

/// Tests moving a topic backward.
///
/// Expected: the last topic moves to the front and the others shift down by one
#[tokio::test]
async fn moves_backward() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = SyllabusLocks::new();

    let (_, course, t) = factory::helpers::create_course_with_topics(db, 4).await?;

    SyllabusLedger::new(db, &locks)
        .move_to(course.id, t[3].id, 1)
        .await?;

    assert_eq!(
        syllabus_order(db, course.id).await?,
        vec![t[3].id, t[0].id, t[1].id, t[2].id]
    );
    assert_eq!(syllabus_sequences(db, course.id).await?, vec![1, 2, 3, 4]);

    Ok(())
}

/// Tests moving a topic to the position it already holds.
///
/// Expected: Ok with the same position and no change in order
#[tokio::test]
async fn same_position_is_noop() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = SyllabusLocks::new();

    let (_, course, t) = factory::helpers::create_course_with_topics(db, 3).await?;

    let entry = SyllabusLedger::new(db, &locks)
        .move_to(course.id, t[1].id, 2)
        .await?;

    assert_eq!(entry.sequence, 2);
    assert_eq!(
        syllabus_order(db, course.id).await?,
        vec![t[0].id, t[1].id, t[2].id]
    );

    Ok(())
}

/// Tests positions outside the syllabus range.
///
/// Expected: positions past the end clamp to the last slot, positions below 1 clamp to 1
#[tokio::test]
async fn clamps_out_of_range_positions() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = SyllabusLocks::new();

    let (_, course, t) = factory::helpers::create_course_with_topics(db, 3).await?;
    let ledger = SyllabusLedger::new(db, &locks);

    let entry = ledger.move_to(course.id, t[0].id, 99).await?;
    assert_eq!(entry.sequence, 3);
    assert_eq!(
        syllabus_order(db, course.id).await?,
        vec![t[1].id, t[2].id, t[0].id]
    );

    let entry = ledger.move_to(course.id, t[0].id, -7).await?;
    assert_eq!(entry.sequence, 1);
    assert_eq!(
        syllabus_order(db, course.id).await?,
        vec![t[0].id, t[1].id, t[2].id]
    );
    assert_eq!(syllabus_sequences(db, course.id).await?, vec![1, 2, 3]);

    Ok(())
}

/// Tests moving a topic that is not in the syllabus.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn unknown_entry_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = SyllabusLocks::new();

    let (creator, course, _) = factory::helpers::create_course_with_topics(db, 2).await?;
    let outside = factory::create_topic(db, creator.id).await?;

    let result = SyllabusLedger::new(db, &locks)
        .move_to(course.id, outside.id, 1)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
