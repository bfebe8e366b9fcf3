use super::*;

/// Tests many appends racing on one course.
///
/// Expected: every topic gets a distinct position and the syllabus is exactly 1..=N
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_appends_stay_dense() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = SyllabusLocks::new();

    let (creator, course) = factory::helpers::create_course_with_creator(db).await?;
    let mut topic_ids = Vec::new();
    for _ in 0..8 {
        topic_ids.push(factory::create_topic(db, creator.id).await?.id);
    }

    let mut handles = Vec::new();
    for topic_id in topic_ids {
        let db = db.clone();
        let locks = locks.clone();
        let course_id = course.id;
        handles.push(tokio::spawn(async move {
            SyllabusLedger::new(&db, &locks)
                .append(course_id, topic_id)
                .await
        }));
    }
    for handle in handles {
        handle.await.unwrap()?;
    }

    assert_eq!(
        syllabus_sequences(db, course.id).await?,
        (1..=8).collect::<Vec<i32>>()
    );

    Ok(())
}

/// Tests moves and removals racing on one course.
///
/// Expected: the syllabus is dense once every operation has finished
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_moves_and_removals_stay_dense() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = SyllabusLocks::new();

    let (_, course, t) = factory::helpers::create_course_with_topics(db, 6).await?;

    let mut handles = Vec::new();
    for (index, topic) in t.iter().enumerate() {
        let db = db.clone();
        let locks = locks.clone();
        let course_id = course.id;
        let topic_id = topic.id;
        handles.push(tokio::spawn(async move {
            let ledger = SyllabusLedger::new(&db, &locks);
            if index % 3 == 0 {
                ledger.remove(course_id, topic_id).await
            } else {
                ledger
                    .move_to(course_id, topic_id, 6 - index as i64)
                    .await
                    .map(|_| ())
            }
        }));
    }
    for handle in handles {
        handle.await.unwrap()?;
    }

    assert_eq!(syllabus_sequences(db, course.id).await?, vec![1, 2, 3, 4]);

    Ok(())
}

/// Tests placements and moves of a topic racing with its deletion across several courses.
///
/// Expected: the topic ends up in no syllabus and every syllabus is dense
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn placements_racing_topic_delete_stay_dense() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = SyllabusLocks::new();

    let (creator, first, t) = factory::helpers::create_course_with_topics(db, 4).await?;
    let doomed = t[0].id;
    let mut courses = vec![first.id];
    for _ in 0..3 {
        let course = factory::create_course(db, creator.id).await?;
        factory::syllabus::link(db, course.id, t[1].id, 1).await?;
        factory::syllabus::link(db, course.id, t[2].id, 2).await?;
        courses.push(course.id);
    }

    let mut handles = Vec::new();
    for course_id in courses.iter().skip(1).copied() {
        let db = db.clone();
        let locks = locks.clone();
        handles.push(tokio::spawn(async move {
            let ledger = SyllabusLedger::new(&db, &locks);
            // Either side of the deletion is fine; only the final shape matters.
            if ledger.append(course_id, doomed).await.is_ok() {
                let _ = ledger.move_to(course_id, doomed, 1).await;
            }
        }));
    }
    let delete = {
        let db = db.clone();
        let locks = locks.clone();
        tokio::spawn(async move { SyllabusLedger::new(&db, &locks).delete_topic(doomed).await })
    };

    for handle in handles {
        handle.await.unwrap();
    }
    delete.await.unwrap()?;

    for course_id in courses {
        let order = syllabus_order(db, course_id).await?;
        assert!(!order.contains(&doomed));
        assert_eq!(
            syllabus_sequences(db, course_id).await?,
            (1..=order.len() as i32).collect::<Vec<i32>>()
        );
    }
    assert_eq!(locks.len(), 0);

    Ok(())
}
