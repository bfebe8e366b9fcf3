use super::*;

/// Tests enrolling a student in a course.
///
/// Expected: Ok with the row visible through exists and student_ids
#[tokio::test]
async fn enrolls_student_in_course() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, course) = factory::helpers::create_course_with_creator(db).await?;
    let student = factory::create_user(db).await?;

    let repo = ParticipationRepository::new(db, ParticipationKind::Course);
    repo.insert(course.id, student.id).await?;

    assert!(repo.exists(course.id, student.id).await?);
    assert_eq!(repo.student_ids(course.id).await?, vec![student.id]);

    Ok(())
}

/// Tests inserting the same enrollment twice.
///
/// Expected: Err from the composite primary key
#[tokio::test]
async fn rejects_duplicate_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_training_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, training) = factory::helpers::create_training_with_creator(db).await?;
    let student = factory::create_user(db).await?;

    let repo = ParticipationRepository::new(db, ParticipationKind::Training);
    repo.insert(training.id, student.id).await?;

    assert!(repo.insert(training.id, student.id).await.is_err());

    Ok(())
}
