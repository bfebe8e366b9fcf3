use thiserror::Error;

/// Failures of the identity cache backend.
#[derive(Error, Debug)]
pub enum CacheError {
    /// No pooled Redis connection could be obtained.
    #[error("Cache pool error: {0}")]
    Pool(String),

    #[error(transparent)]
    Redis(#[from] bb8_redis::redis::RedisError),
}

/// Failures of the identity service WebSocket exchange.
///
/// Only `Rejected` and `NotCached` are credential problems; every other variant means
/// the service is unreachable or misbehaving.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Connection could not be established within the connect timeout.
    #[error("Failed to connect to identity service: {0}")]
    Connect(String),

    /// The socket failed or closed during an exchange.
    #[error("Identity service transport error: {0}")]
    Transport(String),

    /// The service sent something that is not a valid response frame.
    #[error("Malformed identity service response: {0}")]
    Protocol(String),

    /// The pool has been closed during shutdown.
    #[error("Identity service connection pool is closed")]
    PoolClosed,

    #[error(transparent)]
    Cache(#[from] CacheError),

    /// The service answered with a non-`ok` status.
    #[error("{0}")]
    Rejected(String),

    /// The service answered `ok` but no identity record was cached.
    #[error("Identity not found in cache after validation")]
    NotCached,
}
