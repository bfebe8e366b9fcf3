use super::*;

/// Tests loading a set of courses by id.
///
/// Expected: only the requested courses are returned, empty input yields an empty list
#[tokio::test]
async fn loads_requested_courses() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::create_user(db).await?;
    let first = factory::create_course(db, creator.id).await?;
    let second = factory::create_course(db, creator.id).await?;
    factory::create_course(db, creator.id).await?;

    let repo = CourseRepository::new(db);
    let mut ids: Vec<Uuid> = repo
        .list_by_ids(vec![first.id, second.id])
        .await?
        .into_iter()
        .map(|c| c.id)
        .collect();
    ids.sort();

    let mut expected = vec![first.id, second.id];
    expected.sort();
    assert_eq!(ids, expected);

    assert!(repo.list_by_ids(Vec::new()).await?.is_empty());

    Ok(())
}
