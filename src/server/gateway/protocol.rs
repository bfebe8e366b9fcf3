//! Identity service wire format.
//!
//! Every exchange is one JSON text frame each way:
//! `{"action": "...", "content": {...}}` out and `{"status": "ok" | "...", "message": ...}` back.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Status value of a successful response.
pub const STATUS_OK: &str = "ok";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GatewayAction {
    /// Validate a bearer access token.
    Validate,
    /// Validate a Telegram user through the bot credential.
    AuthBot,
}

#[derive(Debug, Clone, Serialize)]
pub struct GatewayRequest {
    pub action: GatewayAction,
    pub content: Value,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GatewayResponse {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}

impl GatewayResponse {
    pub fn is_ok(&self) -> bool {
        self.status == STATUS_OK
    }
}
