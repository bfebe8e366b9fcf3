use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::server::{
    bot::telegram::TelegramBot,
    config::Config,
    error::{auth::AuthError, AppError},
    gateway::{
        cache::RedisIdentityCache,
        pool::{WsPool, WsPoolConfig},
        AuthGateway,
    },
};

/// Initializes the global tracing subscriber.
///
/// `RUST_LOG` takes precedence; otherwise the level is `debug` when `DEBUG` is set and
/// `info` otherwise.
pub fn init_tracing(config: &Config) {
    let default_level = if config.debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then runs all pending SeaORM migrations so the schema is up to date
/// before any request is served.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the identity gateway: a Redis-backed cache and an empty WebSocket pool.
///
/// No identity service connection is opened here; the pool fills on demand.
pub async fn setup_auth_gateway(config: &Config) -> Result<AuthGateway, AppError> {
    let cache = RedisIdentityCache::connect(&config.redis_url)
        .await
        .map_err(|e| AuthError::ServiceUnavailable(e.to_string()))?;

    let pool = WsPool::new(WsPoolConfig {
        url: config.auth_ws_url.clone(),
        internal_key: config.internal_api_key.clone(),
        capacity: config.ws_pool_size,
        connect_timeout: config.auth_connect_timeout,
    });

    tracing::info!(
        "Identity gateway ready ({} connections max)",
        pool.capacity()
    );

    Ok(AuthGateway::new(Arc::new(cache), Arc::new(pool)))
}

/// Builds the HTTP client used for outgoing API calls.
///
/// Redirects are disabled so a misconfigured API URL cannot bounce requests elsewhere.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    Ok(reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()?)
}

/// Builds the Telegram client when both the bot token and the free group id are set.
pub fn setup_telegram_bot(config: &Config, http: reqwest::Client) -> Option<TelegramBot> {
    match (&config.tg_bot_token, &config.tg_free_group_id) {
        (Some(token), Some(group_id)) => Some(TelegramBot::new(
            http,
            config.tg_api_url.clone(),
            token.clone(),
            group_id.clone(),
        )),
        _ => {
            tracing::warn!(
                "TG_BOT_TOKEN or TG_FREE_GROUP_ID not set, free course discussion threads disabled"
            );
            None
        }
    }
}
