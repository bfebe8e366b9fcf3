use super::*;

/// Tests that a patch only writes the fields it carries.
///
/// Expected: Ok with the new price, unchanged name and a refreshed last_updated_at
#[tokio::test]
async fn updates_present_fields_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, course) = factory::helpers::create_course_with_creator(db).await?;

    let repo = CourseRepository::new(db);
    let updated = repo
        .update(
            course.id,
            CoursePatch {
                price: Some(250),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.price, 250);
    assert_eq!(updated.name, course.name);
    assert_eq!(updated.description, course.description);
    assert!(updated.last_updated_at >= course.last_updated_at);

    Ok(())
}

/// Tests that an empty patch leaves the record's data unchanged.
///
/// Expected: Ok with a course equal to the stored one
#[tokio::test]
async fn empty_patch_keeps_record() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, course) = factory::helpers::create_course_with_creator(db).await?;

    let repo = CourseRepository::new(db);
    let before = repo.find_by_id(course.id).await?.unwrap();
    let after = repo
        .update(course.id, CoursePatch::default())
        .await?
        .unwrap();

    assert_eq!(before, after);

    Ok(())
}

/// Tests updating a course that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_course() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = CourseRepository::new(db)
        .update(
            Uuid::new_v4(),
            CoursePatch {
                name: Some("Ghost".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}
