//! A single WebSocket connection to the identity service.

use std::time::Duration;

use futures_util::{FutureExt, SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio_tungstenite::{
    connect_async,
    tungstenite::{client::IntoClientRequest, http::HeaderValue, Message},
    MaybeTlsStream, WebSocketStream,
};

use crate::server::{
    error::gateway::GatewayError,
    gateway::protocol::{GatewayRequest, GatewayResponse},
};

/// Header carrying the shared secret on the WebSocket handshake.
pub const INTERNAL_KEY_HEADER: &str = "X-Internal-Key";

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

pub struct AuthWsConnection {
    stream: WsStream,
    closed: bool,
}

impl AuthWsConnection {
    /// Opens a connection, failing with `GatewayError::Connect` after `timeout`.
    pub async fn connect(
        url: &str,
        internal_key: &str,
        timeout: Duration,
    ) -> Result<Self, GatewayError> {
        let mut request = url
            .into_client_request()
            .map_err(|e| GatewayError::Connect(e.to_string()))?;
        let key = HeaderValue::from_str(internal_key)
            .map_err(|e| GatewayError::Connect(format!("invalid internal key: {}", e)))?;
        request.headers_mut().insert(INTERNAL_KEY_HEADER, key);

        let (stream, _) = tokio::time::timeout(timeout, connect_async(request))
            .await
            .map_err(|_| GatewayError::Connect(format!("timed out after {:?}", timeout)))?
            .map_err(|e| GatewayError::Connect(e.to_string()))?;

        tracing::debug!("Opened identity service connection to {}", url);

        Ok(Self {
            stream,
            closed: false,
        })
    }

    /// Sends one request and waits for its response.
    ///
    /// Any failure marks the connection closed so the pool discards it.
    pub async fn exchange(
        &mut self,
        request: &GatewayRequest,
    ) -> Result<GatewayResponse, GatewayError> {
        let result = self.exchange_inner(request).await;
        if result.is_err() {
            self.closed = true;
        }
        result
    }

    async fn exchange_inner(
        &mut self,
        request: &GatewayRequest,
    ) -> Result<GatewayResponse, GatewayError> {
        let payload =
            serde_json::to_string(request).map_err(|e| GatewayError::Protocol(e.to_string()))?;

        self.stream
            .send(Message::text(payload))
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        loop {
            let message = self
                .stream
                .next()
                .await
                .ok_or_else(|| GatewayError::Transport("connection closed".to_string()))?
                .map_err(|e| GatewayError::Transport(e.to_string()))?;

            match message {
                Message::Text(text) => {
                    return serde_json::from_str(text.as_str())
                        .map_err(|e| GatewayError::Protocol(e.to_string()));
                }
                Message::Binary(bytes) => {
                    return serde_json::from_slice(&bytes)
                        .map_err(|e| GatewayError::Protocol(e.to_string()));
                }
                Message::Close(_) => {
                    return Err(GatewayError::Transport(
                        "connection closed by identity service".to_string(),
                    ));
                }
                Message::Ping(_) | Message::Pong(_) | Message::Frame(_) => {}
            }
        }
    }

    /// Checks without blocking whether the peer has closed the connection.
    ///
    /// An unsolicited data frame also counts as closed, since its response pairing is lost.
    pub fn is_closed(&mut self) -> bool {
        if self.closed {
            return true;
        }

        self.closed = match self.stream.next().now_or_never() {
            None => false,
            Some(Some(Ok(Message::Ping(_) | Message::Pong(_)))) => false,
            Some(_) => true,
        };

        self.closed
    }

    /// Sends a close frame, ignoring failures.
    pub async fn close(mut self) {
        if self.closed {
            return;
        }

        if let Err(e) = self.stream.close(None).await {
            tracing::debug!("Failed to close identity service connection: {}", e);
        }
    }
}
