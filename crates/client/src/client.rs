//! Client façade
//!
//! Thin composition of the decoder, the channel registry and the outbound
//! transport. Holds no per-message state: outbound sends are independent
//! fire-and-forget writes, and every command outcome arrives later as an
//! ordinary inbound event on the same channel.

use std::sync::Arc;

use log::{debug, warn};

use crate::channels::{ChannelId, ChannelRegistry, RoutingOutcome};
use crate::error::{ClientError, DecodeError, TransportError};
use crate::listener::EventListener;
use crate::messages;
use crate::outbound::{CommandArgs, encode_command};
use crate::outbound::order::{
    MarginDetailsRequest, OrderRequest, TradingAction, cancel_all_orders_args, cancel_order_args,
};
use crate::transport::Transport;

/// Client for the exchange websocket API.
///
/// Owns the registry, the decoder and the outbound connection; inbound
/// frames are delivered by the transport glue through
/// [`ExchangeClient::handle_message`] and surface as [`EventListener`]
/// callbacks.
pub struct ExchangeClient<T: Transport> {
    transport: T,
    registry: ChannelRegistry,
    listener: Arc<dyn EventListener>,
}

impl<T: Transport> ExchangeClient<T> {
    pub fn new(transport: T, listener: Arc<dyn EventListener>) -> Self {
        Self {
            transport,
            registry: ChannelRegistry::new(),
            listener,
        }
    }

    async fn send(&self, text: String) -> Result<(), ClientError> {
        debug!("sending message: {}", text);
        self.transport.send(&text).await?;
        Ok(())
    }

    /// Subscribe to a channel with optional scalar arguments
    pub async fn subscribe(
        &self,
        channel: ChannelId,
        args: Option<CommandArgs>,
    ) -> Result<(), ClientError> {
        self.send(self.registry.get(channel).subscribe_command(args.as_ref()))
            .await
    }

    /// Unsubscribe from a channel with optional scalar arguments
    pub async fn unsubscribe(
        &self,
        channel: ChannelId,
        args: Option<CommandArgs>,
    ) -> Result<(), ClientError> {
        self.send(self.registry.get(channel).unsubscribe_command(args.as_ref()))
            .await
    }

    /// Authenticate the connection (subscribe on the auth channel)
    pub async fn auth(&self, api_key: &str) -> Result<(), ClientError> {
        self.subscribe(
            ChannelId::Auth,
            Some(CommandArgs::new().arg("token", api_key)),
        )
        .await
    }

    /// Validate and place an order. Constraint violations surface here,
    /// before anything is sent.
    pub async fn place_order(&self, request: &OrderRequest) -> Result<(), ClientError> {
        let args = request.wire_args()?;
        self.send_trading(request.action(), Some(&args)).await
    }

    /// Cancel one live order by exchange order id
    pub async fn cancel_order(&self, order_id: &str) -> Result<(), ClientError> {
        self.send_trading(TradingAction::CancelOrder, Some(&cancel_order_args(order_id)))
            .await
    }

    /// Cancel all live orders, optionally restricted to one symbol
    pub async fn cancel_all_orders(&self, symbol: Option<&str>) -> Result<(), ClientError> {
        self.send_trading(
            TradingAction::CancelAllOrders,
            Some(&cancel_all_orders_args(symbol)),
        )
        .await
    }

    /// Request a snapshot of all live orders
    pub async fn list_live_orders(&self) -> Result<(), ClientError> {
        self.send_trading(TradingAction::ListLiveOrders, None).await
    }

    /// Request margin details for a prospective position
    pub async fn margin_order_details(
        &self,
        request: &MarginDetailsRequest,
    ) -> Result<(), ClientError> {
        self.send_trading(TradingAction::MarginOrderDetails, Some(&request.wire_args()))
            .await
    }

    async fn send_trading(
        &self,
        action: TradingAction,
        args: Option<&CommandArgs>,
    ) -> Result<(), ClientError> {
        self.send(encode_command(action.as_str(), ChannelId::Trading, args))
            .await
    }

    /// Deliver one raw inbound frame.
    ///
    /// Routed messages surface as exactly one listener callback; frames no
    /// handler claims (unknown channel, unrecognized event) go to the
    /// catch-all [`EventListener::on_message`]. Malformed JSON and schema
    /// mismatches on known channels are hard errors.
    pub fn handle_message(&self, text: &str) -> Result<(), DecodeError> {
        let msg = messages::decode(text)?;
        match self.registry.route(&msg, self.listener.as_ref()) {
            RoutingOutcome::Handled => {}
            RoutingOutcome::NotHandled => self.listener.on_message(text),
            RoutingOutcome::Unrouted => {
                warn!(
                    "unexpected channel {} received [message='{}']",
                    msg.channel(),
                    text
                );
                self.listener.on_message(text);
            }
        }
        Ok(())
    }

    /// Transport reports the connection is open
    pub fn handle_open(&self) {
        self.listener.on_connect();
    }

    /// Transport reports the connection closed
    pub fn handle_close(&self, code: u16, reason: &str, remote: bool) {
        self.listener.on_disconnect(code, reason, remote);
    }

    /// Transport reports a connection-level error
    pub fn handle_error(&self, error: &TransportError) {
        self.listener.on_error(error);
    }
}
