use super::*;

/// Tests listing the courses a student joined.
///
/// Expected: only the course the student is enrolled in
#[tokio::test]
async fn lists_joined_courses() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::create_user(db).await?;
    let joined = factory::create_course(db, creator.id).await?;
    factory::create_course(db, creator.id).await?;
    let training = factory::create_training(db, creator.id).await?;
    let student = factory::create_user(db).await?;

    factory::participation::enroll_in_course(db, joined.id, student.id).await?;
    factory::participation::enroll_in_training(db, training.id, student.id).await?;

    let courses = ParticipationRepository::new(db, ParticipationKind::Course)
        .entity_ids_for_student(student.id)
        .await?;
    let trainings = ParticipationRepository::new(db, ParticipationKind::Training)
        .entity_ids_for_student(student.id)
        .await?;

    assert_eq!(courses, vec![joined.id]);
    assert_eq!(trainings, vec![training.id]);

    Ok(())
}
