use super::*;

/// Tests that ownership filtering hides other users' courses.
///
/// Expected: Some for the creator, None for anyone else
#[tokio::test]
async fn returns_course_only_for_creator() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (creator, course) = factory::helpers::create_course_with_creator(db).await?;
    let stranger = factory::create_user(db).await?;

    let repo = CourseRepository::new(db);

    assert!(repo.find_owned(course.id, creator.id).await?.is_some());
    assert!(repo.find_owned(course.id, stranger.id).await?.is_none());
    assert!(repo.find_owned(Uuid::new_v4(), creator.id).await?.is_none());

    Ok(())
}
