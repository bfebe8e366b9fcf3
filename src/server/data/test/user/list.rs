use super::*;

/// Tests offset/limit pagination of users.
///
/// Expected: Ok with the second page holding the remaining user
#[tokio::test]
async fn paginates_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db).name("Alice").build().await?;
    factory::user::UserFactory::new(db).name("Bob").build().await?;
    factory::user::UserFactory::new(db).name("Carol").build().await?;

    let repo = UserRepository::new(db);
    let first = repo.list(0, 2).await?;
    let second = repo.list(2, 2).await?;

    assert_eq!(first.len(), 2);
    assert_eq!(first[0].name, "Alice");
    assert_eq!(second.len(), 1);
    assert_eq!(second[0].name, "Carol");

    Ok(())
}
