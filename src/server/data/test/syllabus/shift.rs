use super::*;

/// Tests shifting a sequence range down by one.
///
/// Expected: only entries inside the range move, other courses are untouched
#[tokio::test]
async fn shifts_only_range_of_one_course() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, course, _) = factory::helpers::create_course_with_topics(db, 5).await?;
    let (_, other, _) = factory::helpers::create_course_with_topics(db, 3).await?;

    let repo = SyllabusRepository::new(db);
    let shifted = repo.shift(course.id, 3, 5, -1).await?;

    assert_eq!(shifted, 3);
    assert_eq!(repo.sequences(course.id).await?, vec![1, 2, 2, 3, 4]);
    assert_eq!(repo.sequences(other.id).await?, vec![1, 2, 3]);

    Ok(())
}

/// Tests an empty range.
///
/// Expected: no rows affected
#[tokio::test]
async fn empty_range_shifts_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, course, _) = factory::helpers::create_course_with_topics(db, 2).await?;

    let shifted = SyllabusRepository::new(db)
        .shift(course.id, 3, 5, 1)
        .await?;

    assert_eq!(shifted, 0);

    Ok(())
}
