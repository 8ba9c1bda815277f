//! Mercury Client
//!
//! Message-protocol core for the Mercury exchange websocket API: a single
//! text stream multiplexing named channels (auth, balances, order books,
//! trades, prices, ticker, symbols, trading, heartbeat).
//!
//! ## Architecture
//!
//! ```text
//!  outbound                         inbound
//!  caller                           transport
//!    │                                 │ raw text
//!  ┌─▼──────────────┐            ┌─────▼─────┐
//!  │ OrderRequest   │            │  decode   │
//!  │ validation     │            └─────┬─────┘
//!  └─┬──────────────┘            ┌─────▼─────┐
//!  ┌─▼──────────────┐            │  Channel  │
//!  │ encode_command │            │  Registry │
//!  └─┬──────────────┘            └─────┬─────┘
//!    │ raw text                        │ typed events
//!  transport                      EventListener
//! ```
//!
//! The transport socket itself (connect/reconnect, TLS, ping/pong) is an
//! external collaborator behind the [`transport::Transport`] port; this
//! crate only builds outbound frames and interprets inbound ones.

pub mod channels;
pub mod client;
pub mod error;
pub mod listener;
pub mod messages;
pub mod outbound;
pub mod transport;

// Re-export commonly used types
pub use channels::{ChannelId, ChannelRegistry, RoutingOutcome};
pub use client::ExchangeClient;
pub use error::{ClientError, DecodeError, InvalidArgument, TransportError};
pub use listener::EventListener;
pub use messages::{ExchangeMessage, ExtraFields, Snapshot, Update, WsEvent, decode};
pub use outbound::{
    ArgValue, CommandArgs, encode_command,
    order::{MarginDetailsRequest, MarginParams, OrderRequest, TradingAction},
};
pub use transport::{ConnectionConfig, Transport};
