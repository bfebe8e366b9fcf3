use super::*;

/// Tests updating a topic title.
///
/// Expected: Ok with new title and original content
#[tokio::test]
async fn updates_title() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::create_user(db).await?;
    let topic = factory::topic::TopicFactory::new(db, creator.id)
        .title("Lifetimes")
        .content("Borrow checker basics")
        .build()
        .await?;

    let updated = TopicRepository::new(db)
        .update(
            topic.id,
            TopicPatch {
                title: Some("Lifetimes in depth".to_string()),
                content: None,
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.title, "Lifetimes in depth");
    assert_eq!(updated.content, "Borrow checker basics");

    Ok(())
}
