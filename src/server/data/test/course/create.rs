use super::*;

/// Tests creating a course.
///
/// Expected: Ok with the stored fields, no discussion thread and equal timestamps
#[tokio::test]
async fn creates_course() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::create_user(db).await?;

    let repo = CourseRepository::new(db);
    let course = repo
        .create(CreateCourseParams {
            name: "Async Rust".to_string(),
            price: 0,
            description: "Futures and executors".to_string(),
            creator_id: creator.id,
        })
        .await?;

    assert_eq!(course.name, "Async Rust");
    assert_eq!(course.creator_id, creator.id);
    assert!(course.is_free());
    assert!(course.tg_group_id.is_none());
    assert_eq!(course.created_at, course.last_updated_at);

    let stored = repo.find_by_id(course.id).await?;
    assert_eq!(stored, Some(course));

    Ok(())
}

/// Tests creating a course for a creator missing from the user projection.
///
/// Expected: Err from the foreign key constraint
#[tokio::test]
async fn fails_for_unknown_creator() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = CourseRepository::new(db)
        .create(CreateCourseParams {
            name: "Orphan".to_string(),
            price: 10,
            description: String::new(),
            creator_id: Uuid::new_v4(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
