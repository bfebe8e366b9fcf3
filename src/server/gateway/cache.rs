//! Identity cache port and its Redis adapter.
//!
//! The identity service writes validated identities to Redis as JSON strings; this side
//! only reads them.

use async_trait::async_trait;
use bb8_redis::{bb8, redis::AsyncCommands, RedisConnectionManager};

use crate::server::error::gateway::CacheError;

/// Cache key of an identity validated by access token.
pub fn access_token_key(token: &str) -> String {
    format!("access_token:{}", token)
}

/// Cache key of an identity validated through the Telegram bot.
pub fn telegram_key(telegram_user_id: i64) -> String {
    format!("tg_token:{}", telegram_user_id)
}

/// Read access to cached identity records.
#[async_trait]
pub trait IdentityCache: Send + Sync {
    /// Raw JSON stored under `key`, if any.
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError>;
}

/// Redis-backed cache using a `bb8` connection pool.
#[derive(Clone)]
pub struct RedisIdentityCache {
    pool: bb8::Pool<RedisConnectionManager>,
}

impl RedisIdentityCache {
    pub async fn connect(url: &str) -> Result<Self, CacheError> {
        let manager = RedisConnectionManager::new(url)?;
        let pool = bb8::Pool::builder().build(manager).await?;

        Ok(Self { pool })
    }
}

#[async_trait]
impl IdentityCache for RedisIdentityCache {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|e| CacheError::Pool(e.to_string()))?;

        let value: Option<String> = conn.get(key).await?;

        Ok(value)
    }
}
