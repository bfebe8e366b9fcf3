use super::*;

/// Tests finding every course that contains a topic.
///
/// Expected: both linking courses, not the unrelated one
#[tokio::test]
async fn finds_courses_containing_topic() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::create_user(db).await?;
    let topic = factory::create_topic(db, creator.id).await?;
    let first = factory::create_course(db, creator.id).await?;
    let second = factory::create_course(db, creator.id).await?;
    factory::create_course(db, creator.id).await?;

    factory::syllabus::link(db, first.id, topic.id, 1).await?;
    factory::syllabus::link(db, second.id, topic.id, 1).await?;

    let mut ids = SyllabusRepository::new(db)
        .course_ids_for_topic(topic.id)
        .await?;
    ids.sort();

    let mut expected = vec![first.id, second.id];
    expected.sort();
    assert_eq!(ids, expected);

    Ok(())
}
