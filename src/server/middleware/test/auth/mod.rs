use std::{sync::Arc, time::Duration};

use axum::http::{HeaderMap, HeaderValue};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    error::{auth::AuthError, AppError},
    gateway::{
        cache::{access_token_key, memory::MemoryIdentityCache, telegram_key},
        pool::{WsPool, WsPoolConfig},
        AuthGateway,
    },
    middleware::auth::AuthGuard,
    service::user::UserService,
};
use test_utils::builder::TestBuilder;

mod require;

const INTERNAL_KEY: &str = "internal-secret";

/// Gateway whose pool points at a closed port, so only cache hits succeed.
fn offline_gateway(cache: Arc<MemoryIdentityCache>) -> AuthGateway {
    let pool = WsPool::new(WsPoolConfig {
        url: "ws://127.0.0.1:1".to_string(),
        internal_key: INTERNAL_KEY.to_string(),
        capacity: 1,
        connect_timeout: Duration::from_millis(200),
    });

    AuthGateway::new(cache, Arc::new(pool))
}

fn identity_json(id: Uuid, name: &str) -> String {
    serde_json::json!({
        "id": id,
        "name": name,
        "email": format!("{}@example.com", name.to_lowercase()),
    })
    .to_string()
}

fn headers(pairs: &[(&'static str, &str)]) -> HeaderMap {
    let mut map = HeaderMap::new();
    for (name, value) in pairs {
        map.insert(*name, HeaderValue::from_str(value).unwrap());
    }
    map
}

async fn user_name(db: &DatabaseConnection, id: Uuid) -> Result<String, AppError> {
    Ok(UserService::new(db).get(id).await?.name)
}
