use super::*;

/// Tests page/page_size pagination of trainings.
///
/// Verifies that pages are zero-based and disjoint.
///
/// Expected: pages of 2, 2 and 1 trainings covering all five
#[tokio::test]
async fn pages_through_trainings() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_training_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::create_user(db).await?;
    for _ in 0..5 {
        factory::create_training(db, creator.id).await?;
    }

    let repo = TrainingRepository::new(db);
    let page0 = repo.list_paginated(0, 2).await?;
    let page1 = repo.list_paginated(1, 2).await?;
    let page2 = repo.list_paginated(2, 2).await?;

    assert_eq!(page0.len(), 2);
    assert_eq!(page1.len(), 2);
    assert_eq!(page2.len(), 1);

    let mut ids: Vec<_> = page0
        .iter()
        .chain(page1.iter())
        .chain(page2.iter())
        .map(|t| t.id)
        .collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 5);

    Ok(())
}
