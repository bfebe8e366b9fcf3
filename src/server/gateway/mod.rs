//! Identity service gateway.
//!
//! Authentication is delegated to an external identity service. The service publishes
//! validated identities to a shared Redis cache and answers validation requests over
//! WebSocket. `AuthGateway` joins the two paths:
//!
//! - `lookup` reads the cache only (fast path)
//! - `exchange` sends one request through the connection pool (slow path)
//!
//! `validate` and `validate_bot` try the cache first, fall back to an exchange on a miss,
//! and then read the cache again. The exchange response only reports success; the identity
//! itself is always taken from the cache.

pub mod cache;
pub mod connection;
pub mod pool;
pub mod protocol;


use std::sync::Arc;

use serde_json::{json, Value};
use subtle::ConstantTimeEq;

use crate::server::{
    error::gateway::GatewayError,
    gateway::{
        cache::{access_token_key, telegram_key, IdentityCache},
        pool::WsPool,
        protocol::{GatewayAction, GatewayRequest},
    },
    model::user::UserIdentity,
};

#[derive(Clone)]
pub struct AuthGateway {
    cache: Arc<dyn IdentityCache>,
    pool: Arc<WsPool>,
}

impl AuthGateway {
    pub fn new(cache: Arc<dyn IdentityCache>, pool: Arc<WsPool>) -> Self {
        Self { cache, pool }
    }

    /// Validates a bearer access token.
    ///
    /// # Returns
    /// - `Ok(UserIdentity)` - Identity cached for the token
    /// - `Err(GatewayError::Rejected)` - Service refused the token
    /// - `Err(GatewayError::NotCached)` - Service accepted but no identity was cached
    /// - `Err(_)` - Service or cache unavailable
    pub async fn validate(&self, token: &str) -> Result<UserIdentity, GatewayError> {
        self.resolve(
            &access_token_key(token),
            GatewayAction::Validate,
            json!({ "token": token }),
        )
        .await
    }

    /// Validates a Telegram user on behalf of the bot.
    pub async fn validate_bot(&self, telegram_user_id: i64) -> Result<UserIdentity, GatewayError> {
        self.resolve(
            &telegram_key(telegram_user_id),
            GatewayAction::AuthBot,
            json!({ "telegram_id": telegram_user_id }),
        )
        .await
    }

    /// Reads a cached identity.
    pub async fn lookup(&self, key: &str) -> Result<Option<UserIdentity>, GatewayError> {
        let Some(raw) = self.cache.get(key).await? else {
            return Ok(None);
        };

        let identity = serde_json::from_str(&raw)
            .map_err(|e| GatewayError::Protocol(format!("cached identity: {}", e)))?;

        Ok(Some(identity))
    }

    /// Sends one request to the identity service.
    ///
    /// # Returns
    /// - `Ok(())` - Service answered `ok`
    /// - `Err(GatewayError::Rejected)` - Service answered with another status
    pub async fn exchange(&self, action: GatewayAction, content: Value) -> Result<(), GatewayError> {
        let response = self.pool.send(&GatewayRequest { action, content }).await?;

        if !response.is_ok() {
            let message = response
                .message
                .unwrap_or_else(|| "Invalid credentials".to_string());
            tracing::debug!("Identity service rejected {:?}: {}", action, message);
            return Err(GatewayError::Rejected(message));
        }

        Ok(())
    }

    async fn resolve(
        &self,
        key: &str,
        action: GatewayAction,
        content: Value,
    ) -> Result<UserIdentity, GatewayError> {
        if let Some(identity) = self.lookup(key).await? {
            return Ok(identity);
        }

        self.exchange(action, content).await?;

        self.lookup(key).await?.ok_or(GatewayError::NotCached)
    }

    /// Checks a shared secret presented by an internal caller such as the bot.
    pub fn verify_internal_key(&self, candidate: &str) -> bool {
        let expected = self.pool.internal_key().as_bytes();
        !candidate.is_empty() && bool::from(candidate.as_bytes().ct_eq(expected))
    }

    /// Closes idle identity service connections; called once on shutdown.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
