use super::*;

/// Tests removing an enrollment.
///
/// Expected: one row deleted the first time, none the second time
#[tokio::test]
async fn deletes_enrollment_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_training_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, training) = factory::helpers::create_training_with_creator(db).await?;
    let student = factory::create_user(db).await?;
    factory::participation::enroll_in_training(db, training.id, student.id).await?;

    let repo = ParticipationRepository::new(db, ParticipationKind::Training);

    assert_eq!(repo.delete(training.id, student.id).await?, 1);
    assert_eq!(repo.delete(training.id, student.id).await?, 0);
    assert!(!repo.exists(training.id, student.id).await?);

    Ok(())
}
