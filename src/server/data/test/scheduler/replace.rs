use super::*;

/// Tests that scheduling twice keeps only the latest scheduler.
///
/// Expected: Ok with the second schedule stored and the first one gone
#[tokio::test]
async fn replaces_existing_scheduler() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_training_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, training) = factory::helpers::create_training_with_creator(db).await?;

    let first = Schedule::from_dto(SchedulerDto {
        monday: window("10:00", "11:00"),
        ..Default::default()
    })
    .unwrap();
    let second = Schedule::from_dto(SchedulerDto {
        wednesday: window("18:30", "20:00"),
        ..Default::default()
    })
    .unwrap();

    let repo = SchedulerRepository::new(db);
    repo.replace(training.id, first).await?;
    let stored = repo.replace(training.id, second.clone()).await?;

    assert_eq!(stored, second);
    assert_eq!(repo.find_by_training(training.id).await?, Some(second));

    Ok(())
}

/// Tests reading the scheduler of an unscheduled training.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_without_scheduler() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_training_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, training) = factory::helpers::create_training_with_creator(db).await?;

    let result = SchedulerRepository::new(db)
        .find_by_training(training.id)
        .await?;

    assert!(result.is_none());

    Ok(())
}
