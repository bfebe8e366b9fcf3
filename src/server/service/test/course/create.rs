use super::*;

/// Tests creating a course.
///
/// Expected: Ok(Course) owned by the creator and readable by id
#[tokio::test]
async fn creates_course() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::create_user(db).await?;

    let service = CourseService::new(db);
    let course = service
        .create(CreateCourseParams {
            name: "Rust basics".to_string(),
            price: 0,
            description: "Ownership and borrowing".to_string(),
            creator_id: creator.id,
        })
        .await?;

    assert!(course.is_free());
    assert_eq!(course.creator_id, creator.id);
    assert_eq!(course.tg_group_id, None);
    assert_eq!(service.get(course.id).await?.name, "Rust basics");

    Ok(())
}

/// Tests creating a course for a creator without a user projection.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn unknown_creator_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = CourseService::new(db)
        .create(CreateCourseParams {
            name: "Orphan".to_string(),
            price: 10,
            description: String::new(),
            creator_id: Uuid::new_v4(),
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
