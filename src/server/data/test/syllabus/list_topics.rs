use super::*;

/// Tests that topics are listed in sequence order with their content.
///
/// Expected: topics in the order they were linked, sequences 1..=3
#[tokio::test]
async fn lists_topics_in_sequence_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, course, topics) = factory::helpers::create_course_with_topics(db, 3).await?;

    let listed = SyllabusRepository::new(db).list_topics(course.id).await?;

    let ids: Vec<_> = listed.iter().map(|entry| entry.topic.id).collect();
    let expected: Vec<_> = topics.iter().map(|topic| topic.id).collect();
    assert_eq!(ids, expected);

    let sequences: Vec<_> = listed.iter().map(|entry| entry.sequence).collect();
    assert_eq!(sequences, vec![1, 2, 3]);
    assert_eq!(listed[0].topic.title, topics[0].title);

    Ok(())
}
