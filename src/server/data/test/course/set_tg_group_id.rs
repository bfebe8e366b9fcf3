use super::*;

/// Tests storing the discussion thread id of a course.
///
/// Expected: Ok with tg_group_id persisted
#[tokio::test]
async fn stores_thread_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, course) = factory::helpers::create_course_with_creator(db).await?;

    let repo = CourseRepository::new(db);
    repo.set_tg_group_id(course.id, "42".to_string()).await?;

    let stored = repo.find_by_id(course.id).await?.unwrap();
    assert_eq!(stored.tg_group_id.as_deref(), Some("42"));

    Ok(())
}
