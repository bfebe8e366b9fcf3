//! Bounded, lazily filled pool of identity service connections.
//!
//! A semaphore with `capacity` permits bounds the number of live connections: a connection
//! is either idle in the pool or held by exactly one checkout, and every checkout holds a
//! permit. New connections are opened only when no idle one is available. Each checkout
//! serves one request/response exchange; connections that failed or were closed by the
//! peer are dropped instead of re-pooled.

use std::{
    sync::{Mutex, PoisonError},
    time::Duration,
};

use tokio::sync::Semaphore;

use crate::server::{
    error::gateway::GatewayError,
    gateway::{
        connection::AuthWsConnection,
        protocol::{GatewayRequest, GatewayResponse},
    },
};

pub struct WsPoolConfig {
    pub url: String,
    pub internal_key: String,
    pub capacity: usize,
    pub connect_timeout: Duration,
}

pub struct WsPool {
    config: WsPoolConfig,
    idle: Mutex<Vec<AuthWsConnection>>,
    permits: Semaphore,
}

impl WsPool {
    /// Creates an empty pool; no connection is opened until the first checkout.
    pub fn new(config: WsPoolConfig) -> Self {
        let capacity = config.capacity.max(1);

        Self {
            config: WsPoolConfig { capacity, ..config },
            idle: Mutex::new(Vec::with_capacity(capacity)),
            permits: Semaphore::new(capacity),
        }
    }

    pub fn capacity(&self) -> usize {
        self.config.capacity
    }

    pub fn internal_key(&self) -> &str {
        &self.config.internal_key
    }

    /// Runs one exchange on a pooled connection.
    ///
    /// The connection goes back to the idle list only after a completed exchange; a future
    /// cancelled mid-exchange drops its connection.
    pub async fn send(&self, request: &GatewayRequest) -> Result<GatewayResponse, GatewayError> {
        let _permit = self
            .permits
            .acquire()
            .await
            .map_err(|_| GatewayError::PoolClosed)?;

        let mut conn = match self.take_idle() {
            Some(conn) => conn,
            None => {
                AuthWsConnection::connect(
                    &self.config.url,
                    &self.config.internal_key,
                    self.config.connect_timeout,
                )
                .await?
            }
        };

        let response = conn.exchange(request).await;
        self.release(conn);

        response
    }

    /// Pops idle connections until one that is still open is found.
    fn take_idle(&self) -> Option<AuthWsConnection> {
        let mut idle = self.idle.lock().unwrap_or_else(PoisonError::into_inner);

        while let Some(mut conn) = idle.pop() {
            if !conn.is_closed() {
                return Some(conn);
            }
            tracing::debug!("Discarding closed identity service connection");
        }

        None
    }

    fn release(&self, mut conn: AuthWsConnection) {
        if self.permits.is_closed() || conn.is_closed() {
            tracing::debug!("Dropping closed identity service connection");
            return;
        }

        self.idle
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(conn);
    }

    /// Stops new checkouts and sends a close frame on every idle connection.
    ///
    /// Connections checked out at this point are dropped when returned.
    pub async fn close(&self) {
        self.permits.close();

        let idle: Vec<_> = self
            .idle
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .drain(..)
            .collect();

        let count = idle.len();
        for conn in idle {
            conn.close().await;
        }

        tracing::info!("Closed {} idle identity service connections", count);
    }

    #[cfg(test)]
    pub fn idle_count(&self) -> usize {
        self.idle.lock().unwrap_or_else(PoisonError::into_inner).len()
    }
}
