use std::time::Duration;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
const DEFAULT_WS_POOL_SIZE: usize = 10;
const DEFAULT_AUTH_CONNECT_TIMEOUT_SECS: u64 = 5;
const DEFAULT_TG_API_URL: &str = "https://api.telegram.org";

pub struct Config {
    pub database_url: String,
    pub bind_addr: String,

    pub auth_ws_url: String,
    pub internal_api_key: String,
    pub ws_pool_size: usize,
    pub auth_connect_timeout: Duration,

    pub redis_url: String,

    pub tg_bot_token: Option<String>,
    pub tg_free_group_id: Option<String>,
    pub tg_api_url: String,

    pub debug: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            bind_addr: optional("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            auth_ws_url: required("AUTH_WS_URL")?,
            internal_api_key: required("INTERNAL_API_KEY")?,
            ws_pool_size: parsed("WS_POOL_SIZE", DEFAULT_WS_POOL_SIZE)?,
            auth_connect_timeout: Duration::from_secs(parsed(
                "AUTH_CONNECT_TIMEOUT_SECS",
                DEFAULT_AUTH_CONNECT_TIMEOUT_SECS,
            )?),
            redis_url: required("REDIS_URL")?,
            tg_bot_token: optional("TG_BOT_TOKEN"),
            tg_free_group_id: optional("TG_FREE_GROUP_ID"),
            tg_api_url: optional("TG_API_URL").unwrap_or_else(|| DEFAULT_TG_API_URL.to_string()),
            debug: parse_flag(optional("DEBUG").as_deref()),
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

/// Unset and empty variables are both treated as absent.
fn optional(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.trim().is_empty())
}

fn parsed<T: std::str::FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match optional(name) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidEnvVar {
                name: name.to_string(),
                value,
            }),
    }
}

fn parse_flag(value: Option<&str>) -> bool {
    matches!(
        value.map(|v| v.trim().to_ascii_lowercase()).as_deref(),
        Some("1" | "true" | "yes" | "on")
    )
}
