use super::*;

/// Tests a student joining a course.
///
/// Expected: the course appears in the student's joined list and the creator sees the student
#[tokio::test]
async fn joins_course() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (creator, course) = factory::helpers::create_course_with_creator(db).await?;
    let student = factory::create_user(db).await?;

    let service = CourseService::new(db);
    service.join(course.id, student.id).await?;

    let joined = service.list_joined(student.id).await?;
    assert_eq!(joined.len(), 1);
    assert_eq!(joined[0].id, course.id);
    assert_eq!(service.students(course.id, creator.id).await?, vec![student.id]);

    Ok(())
}

/// Tests a creator joining their own course.
///
/// Expected: Err(Conflict)
#[tokio::test]
async fn rejects_own_course() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (creator, course) = factory::helpers::create_course_with_creator(db).await?;

    let result = CourseService::new(db).join(course.id, creator.id).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests joining a course twice.
///
/// Expected: Err(Conflict) on the second join
#[tokio::test]
async fn rejects_second_join() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, course) = factory::helpers::create_course_with_creator(db).await?;
    let student = factory::create_user(db).await?;

    let service = CourseService::new(db);
    service.join(course.id, student.id).await?;
    let result = service.join(course.id, student.id).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests joining a course that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn unknown_course_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_user(db).await?;

    let result = CourseService::new(db).join(Uuid::new_v4(), student.id).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests the same rules for trainings.
///
/// Expected: Ok for a student, Err(Conflict) for the creator
#[tokio::test]
async fn joins_training() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_training_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (creator, training) = factory::helpers::create_training_with_creator(db).await?;
    let student = factory::create_user(db).await?;

    let service = TrainingService::new(db);
    service.join(training.id, student.id).await?;

    assert!(matches!(
        service.join(training.id, creator.id).await,
        Err(AppError::Conflict(_))
    ));
    assert_eq!(
        service.students(training.id, creator.id).await?,
        vec![student.id]
    );

    Ok(())
}
