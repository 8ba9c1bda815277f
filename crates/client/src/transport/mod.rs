//! Outbound connection port
//!
//! The socket itself (connect/reconnect, TLS, ping/pong) lives outside
//! this crate; implementations of [`Transport`] wrap whatever websocket
//! stack the process uses and feed inbound frames back through
//! [`crate::client::ExchangeClient::handle_message`].

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::TransportError;

/// Fire-and-forget outbound send over an open connection.
///
/// There is no queueing, batching or backpressure here; flow control is
/// entirely the implementation's concern.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send one text frame
    async fn send(&self, text: &str) -> Result<(), TransportError>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn send(&self, text: &str) -> Result<(), TransportError> {
        self.as_ref().send(text).await
    }
}

/// Connection settings for transport implementations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionConfig {
    /// WebSocket endpoint
    pub url: String,
    /// Origin header required by the exchange
    pub origin: String,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            url: "wss://ws.blockchain.com/mercury-gateway/v1/ws".to_string(),
            origin: "https://exchange.blockchain.com".to_string(),
        }
    }
}
