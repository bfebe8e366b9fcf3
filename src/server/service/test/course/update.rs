use super::*;

/// Tests a creator updating their course.
///
/// Expected: only the fields present in the patch change
#[tokio::test]
async fn updates_owned_course() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (creator, course) = factory::helpers::create_course_with_creator(db).await?;

    let updated = CourseService::new(db)
        .update(
            course.id,
            creator.id,
            CoursePatch {
                price: Some(250),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.price, 250);
    assert_eq!(updated.name, course.name);
    assert_eq!(updated.description, course.description);

    Ok(())
}

/// Tests another user updating a course they do not own.
///
/// Expected: Err(NotFound) and the course is unchanged
#[tokio::test]
async fn non_owner_gets_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, course) = factory::helpers::create_course_with_creator(db).await?;
    let stranger = factory::create_user(db).await?;

    let service = CourseService::new(db);
    let result = service
        .update(
            course.id,
            stranger.id,
            CoursePatch {
                name: Some("Taken over".to_string()),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert_eq!(service.get(course.id).await?.name, course.name);

    Ok(())
}
