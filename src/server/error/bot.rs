use thiserror::Error;

/// Errors returned by the Telegram Bot API client.
#[derive(Error, Debug)]
pub enum BotError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// Telegram answered with `ok: false`.
    #[error("Telegram API error: {0}")]
    Api(String),

    #[error("Telegram API response is missing its result")]
    MissingResult,
}
