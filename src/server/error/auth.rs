use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::gateway::GatewayError};

#[derive(Error, Debug)]
pub enum AuthError {
    /// Request carried no `Authorization` header or a malformed one.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Missing or malformed authorization header")]
    MissingToken,

    /// The identity service rejected the credential, or no identity was cached after
    /// a successful exchange.
    ///
    /// Results in a 401 Unauthorized response carrying the service message.
    #[error("{0}")]
    Unauthorized(String),

    /// The identity service or its cache could not be reached.
    ///
    /// Results in a 503 Service Unavailable response; details are logged only.
    #[error("Authentication service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl From<GatewayError> for AuthError {
    fn from(err: GatewayError) -> Self {
        match err {
            GatewayError::Rejected(message) => AuthError::Unauthorized(message),
            GatewayError::NotCached => {
                AuthError::Unauthorized("Identity not found after validation".to_string())
            }
            other => AuthError::ServiceUnavailable(other.to_string()),
        }
    }
}

/// Converts authentication errors into HTTP responses.
///
/// - `MissingToken` / `Unauthorized` → 401 Unauthorized
/// - `ServiceUnavailable` → 503 Service Unavailable with a generic message
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingToken => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: self.to_string(),
                }),
            )
                .into_response(),
            Self::Unauthorized(message) => {
                (StatusCode::UNAUTHORIZED, Json(ErrorDto { error: message })).into_response()
            }
            Self::ServiceUnavailable(reason) => {
                tracing::error!("Authentication service unavailable: {}", reason);
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    Json(ErrorDto {
                        error: "Authentication service unavailable".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
