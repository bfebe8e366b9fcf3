use super::*;

/// Tests deleting a scheduled training with a student.
///
/// Expected: the training is gone and the student's joined list is empty
#[tokio::test]
async fn deletes_training_with_dependents() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_training_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (creator, training) = factory::helpers::create_training_with_creator(db).await?;
    let student = factory::create_user(db).await?;
    factory::participation::enroll_in_training(db, training.id, student.id).await?;

    let service = TrainingService::new(db);
    service
        .schedule(
            training.id,
            creator.id,
            Schedule {
                wednesday: Some(range("07:00", "08:00")),
                ..Default::default()
            },
        )
        .await?;

    service.delete(training.id, creator.id).await?;

    assert!(matches!(
        service.get(training.id).await,
        Err(AppError::NotFound(_))
    ));
    assert!(service.list_joined(student.id).await?.is_empty());

    Ok(())
}
