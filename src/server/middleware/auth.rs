//! Request authentication.
//!
//! Two credentials are accepted in the `Authorization` header:
//!
//! - `Bearer <access token>` for end users
//! - `Bot <telegram user id>` for the Telegram bot acting for a user, which must also
//!   present the shared secret in `X-Internal-Key`
//!
//! Both are validated through the identity gateway, and the resulting identity refreshes
//! the local user projection.

use axum::http::{header::AUTHORIZATION, HeaderMap};
use sea_orm::DatabaseConnection;

use crate::server::{
    error::{auth::AuthError, AppError},
    gateway::{connection::INTERNAL_KEY_HEADER, AuthGateway},
    model::user::User,
    service::user::UserService,
};

#[derive(Debug, PartialEq, Eq)]
pub enum Credential<'h> {
    Bearer(&'h str),
    Bot { telegram_user_id: i64, internal_key: &'h str },
}

impl<'h> Credential<'h> {
    /// Extracts the credential from request headers.
    pub fn from_headers(headers: &'h HeaderMap) -> Result<Self, AuthError> {
        let value = headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or(AuthError::MissingToken)?;

        let (scheme, rest) = value.split_once(' ').ok_or(AuthError::MissingToken)?;
        let rest = rest.trim();

        if scheme.eq_ignore_ascii_case("bearer") && !rest.is_empty() {
            return Ok(Self::Bearer(rest));
        }

        if scheme.eq_ignore_ascii_case("bot") {
            let telegram_user_id = rest.parse().map_err(|_| AuthError::MissingToken)?;
            let internal_key = headers
                .get(INTERNAL_KEY_HEADER)
                .and_then(|v| v.to_str().ok())
                .unwrap_or_default();

            return Ok(Self::Bot {
                telegram_user_id,
                internal_key,
            });
        }

        Err(AuthError::MissingToken)
    }
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    gateway: &'a AuthGateway,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, gateway: &'a AuthGateway, headers: &'a HeaderMap) -> Self {
        Self {
            db,
            gateway,
            headers,
        }
    }

    /// Authenticates the request and returns the refreshed user projection.
    ///
    /// # Returns
    /// - `Ok(User)` - Authenticated user
    /// - `Err(AppError::AuthErr)` - Missing or rejected credential, or identity service
    ///   unavailable
    pub async fn require(&self) -> Result<User, AppError> {
        let identity = match Credential::from_headers(self.headers)? {
            Credential::Bearer(token) => self.gateway.validate(token).await,
            Credential::Bot {
                telegram_user_id,
                internal_key,
            } => {
                if !self.gateway.verify_internal_key(internal_key) {
                    return Err(AuthError::Unauthorized("Invalid internal key".to_string()).into());
                }
                self.gateway.validate_bot(telegram_user_id).await
            }
        }
        .map_err(AuthError::from)?;

        UserService::new(self.db).sync(identity).await
    }
}
