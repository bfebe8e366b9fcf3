use super::*;

/// Tests a bearer token found in the identity cache.
///
/// Expected: Ok(User) and the user projection is created
#[tokio::test]
async fn bearer_token_creates_projection() -> Result<(), AppError> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let id = Uuid::new_v4();
    let cache = Arc::new(MemoryIdentityCache::new());
    cache.insert(access_token_key("token-1"), identity_json(id, "Ada"));
    let gateway = offline_gateway(cache);

    let headers = headers(&[("authorization", "Bearer token-1")]);
    let user = AuthGuard::new(db, &gateway, &headers).require().await?;

    assert_eq!(user.id, id);
    assert_eq!(user_name(db, id).await?, "Ada");

    Ok(())
}

/// Tests a second request after the identity changed its name.
///
/// Expected: the existing projection is refreshed rather than duplicated
#[tokio::test]
async fn refreshes_existing_projection() -> Result<(), AppError> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let id = Uuid::new_v4();
    let cache = Arc::new(MemoryIdentityCache::new());
    cache.insert(access_token_key("old"), identity_json(id, "Ada"));
    cache.insert(access_token_key("new"), identity_json(id, "Grace"));
    let gateway = offline_gateway(cache);

    let first = headers(&[("authorization", "Bearer old")]);
    AuthGuard::new(db, &gateway, &first).require().await?;
    let second = headers(&[("authorization", "Bearer new")]);
    AuthGuard::new(db, &gateway, &second).require().await?;

    assert_eq!(user_name(db, id).await?, "Grace");
    assert_eq!(UserService::new(db).list(0, 100).await?.len(), 1);

    Ok(())
}

/// Tests the bot credential with the correct internal key.
///
/// Expected: Ok(User) resolved through the Telegram cache key
#[tokio::test]
async fn bot_credential_with_internal_key() -> Result<(), AppError> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let id = Uuid::new_v4();
    let cache = Arc::new(MemoryIdentityCache::new());
    cache.insert(telegram_key(777), identity_json(id, "Linus"));
    let gateway = offline_gateway(cache);

    let headers = headers(&[
        ("authorization", "Bot 777"),
        ("x-internal-key", INTERNAL_KEY),
    ]);
    let user = AuthGuard::new(db, &gateway, &headers).require().await?;

    assert_eq!(user.id, id);

    Ok(())
}

/// Tests the bot credential with a wrong internal key.
///
/// Expected: Err(Unauthorized) without reading the cache
#[tokio::test]
async fn bot_credential_with_wrong_key() -> Result<(), AppError> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let cache = Arc::new(MemoryIdentityCache::new());
    let gateway = offline_gateway(cache.clone());

    let headers = headers(&[
        ("authorization", "Bot 777"),
        ("x-internal-key", "guess"),
    ]);
    let result = AuthGuard::new(db, &gateway, &headers).require().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::Unauthorized(_)))
    ));
    assert_eq!(cache.reads(), 0);

    Ok(())
}

/// Tests a request without an Authorization header.
///
/// Expected: Err(MissingToken)
#[tokio::test]
async fn missing_header() -> Result<(), AppError> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let gateway = offline_gateway(Arc::new(MemoryIdentityCache::new()));

    let result = AuthGuard::new(db, &gateway, &HeaderMap::new())
        .require()
        .await;

    assert!(matches!(result, Err(AppError::AuthErr(AuthError::MissingToken))));

    Ok(())
}

/// Tests a cache miss while the identity service is unreachable.
///
/// Expected: Err(ServiceUnavailable) and no projection is written
#[tokio::test]
async fn unreachable_identity_service() -> Result<(), AppError> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let gateway = offline_gateway(Arc::new(MemoryIdentityCache::new()));

    let headers = headers(&[("authorization", "Bearer unknown")]);
    let result = AuthGuard::new(db, &gateway, &headers).require().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::ServiceUnavailable(_)))
    ));
    assert!(UserService::new(db).list(0, 100).await?.is_empty());

    Ok(())
}
