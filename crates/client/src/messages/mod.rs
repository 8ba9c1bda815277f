//! Inbound message model and envelope decoder
//!
//! Every inbound frame is one JSON envelope carrying `event` + `channel`
//! discriminators. The `(event, channel)` pair selects exactly one decode
//! path into the closed [`ExchangeMessage`] sum type; unrecognized events
//! or channel names degrade to [`ExchangeMessage::Generic`] rather than
//! erroring, while a shape mismatch on a known channel is a hard
//! [`DecodeError::Schema`].

pub mod market_data;
pub mod order;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::channels::ChannelId;
use crate::error::DecodeError;

pub use market_data::{
    Balance, BalancesSnapshot, HeartbeatUpdate, L2Book, L2Entry, L3Book, L3Entry, OrderBook,
    PricesUpdate, SymbolDetails, SymbolsSnapshot, SymbolsUpdate, Ticker, TradeUpdate,
};
pub use order::{ExchangeOrder, TradingSnapshot};

/// Event discriminator carried on every inbound envelope
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WsEvent {
    Subscribed,
    Unsubscribed,
    Rejected,
    Updated,
    Snapshot,
}

impl WsEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            WsEvent::Subscribed => "subscribed",
            WsEvent::Unsubscribed => "unsubscribed",
            WsEvent::Rejected => "rejected",
            WsEvent::Updated => "updated",
            WsEvent::Snapshot => "snapshot",
        }
    }

    /// Case-insensitive parse; anything unrecognized is `None` (soft fallback)
    pub fn parse(value: &str) -> Option<WsEvent> {
        match value.to_ascii_lowercase().as_str() {
            "subscribed" => Some(WsEvent::Subscribed),
            "unsubscribed" => Some(WsEvent::Unsubscribed),
            "rejected" => Some(WsEvent::Rejected),
            "updated" => Some(WsEvent::Updated),
            "snapshot" => Some(WsEvent::Snapshot),
            _ => None,
        }
    }
}

/// Non-control fields of a generic acknowledgement, in wire order.
///
/// Values are the string representation of the JSON value: strings
/// verbatim, numbers and booleans via display, anything else as compact
/// JSON.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExtraFields(Vec<(String, String)>);

impl ExtraFields {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, (String, String)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, String)> for ExtraFields {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        ExtraFields(iter.into_iter().collect())
    }
}

/// Per-channel snapshot payloads, tagged with the owning channel
#[derive(Debug, Clone, PartialEq)]
pub enum Snapshot {
    Trading(TradingSnapshot),
    Balances(BalancesSnapshot),
    Symbols(SymbolsSnapshot),
    L2(L2Book),
    L3(L3Book),
    Ticker(Ticker),
}

impl Snapshot {
    /// The channel this payload belongs to
    pub fn channel(&self) -> ChannelId {
        match self {
            Snapshot::Trading(_) => ChannelId::Trading,
            Snapshot::Balances(_) => ChannelId::Balances,
            Snapshot::Symbols(_) => ChannelId::Symbols,
            Snapshot::L2(_) => ChannelId::L2,
            Snapshot::L3(_) => ChannelId::L3,
            Snapshot::Ticker(_) => ChannelId::Ticker,
        }
    }
}

/// Per-channel incremental payloads, tagged with the owning channel
#[derive(Debug, Clone, PartialEq)]
pub enum Update {
    Trading(ExchangeOrder),
    Symbols(SymbolsUpdate),
    L2(L2Book),
    L3(L3Book),
    Trades(TradeUpdate),
    Heartbeat(HeartbeatUpdate),
    Prices(PricesUpdate),
    Ticker(Ticker),
}

impl Update {
    /// The channel this payload belongs to
    pub fn channel(&self) -> ChannelId {
        match self {
            Update::Trading(_) => ChannelId::Trading,
            Update::Symbols(_) => ChannelId::Symbols,
            Update::L2(_) => ChannelId::L2,
            Update::L3(_) => ChannelId::L3,
            Update::Trades(_) => ChannelId::Trades,
            Update::Heartbeat(_) => ChannelId::Heartbeat,
            Update::Prices(_) => ChannelId::Prices,
            Update::Ticker(_) => ChannelId::Ticker,
        }
    }
}

/// Closed union over every inbound message shape
#[derive(Debug, Clone, PartialEq)]
pub enum ExchangeMessage {
    Subscribed {
        channel: String,
        extra: Option<ExtraFields>,
    },
    Unsubscribed {
        channel: String,
        extra: Option<ExtraFields>,
    },
    Rejected {
        channel: String,
        extra: Option<ExtraFields>,
    },
    Snapshot(Snapshot),
    Update(Update),
    /// Fallback for an unrecognized `(event, channel)` combination;
    /// carries the full original object
    Generic {
        channel: String,
        raw: Map<String, Value>,
    },
}

impl ExchangeMessage {
    /// Channel name as carried on the wire
    pub fn channel(&self) -> &str {
        match self {
            ExchangeMessage::Subscribed { channel, .. }
            | ExchangeMessage::Unsubscribed { channel, .. }
            | ExchangeMessage::Rejected { channel, .. }
            | ExchangeMessage::Generic { channel, .. } => channel,
            ExchangeMessage::Snapshot(snapshot) => snapshot.channel().as_str(),
            ExchangeMessage::Update(update) => update.channel().as_str(),
        }
    }
}

/// Decode one inbound envelope.
///
/// Never fails for well-formed JSON with an unrecognized event or channel;
/// those degrade to [`ExchangeMessage::Generic`]. Malformed JSON and shape
/// mismatches on known channels are hard errors.
pub fn decode(text: &str) -> Result<ExchangeMessage, DecodeError> {
    let value: Value = serde_json::from_str(text).map_err(DecodeError::Malformed)?;
    let Value::Object(object) = value else {
        return Err(DecodeError::NotAnObject);
    };
    let channel = object
        .get("channel")
        .and_then(Value::as_str)
        .ok_or(DecodeError::MissingChannel)?
        .to_string();
    let event = object
        .get("event")
        .and_then(Value::as_str)
        .and_then(WsEvent::parse);

    match event {
        None => Ok(ExchangeMessage::Generic {
            channel,
            raw: object,
        }),
        Some(WsEvent::Subscribed) => Ok(ExchangeMessage::Subscribed {
            extra: extra_fields(&channel, &object),
            channel,
        }),
        Some(WsEvent::Unsubscribed) => Ok(ExchangeMessage::Unsubscribed {
            extra: extra_fields(&channel, &object),
            channel,
        }),
        Some(WsEvent::Rejected) => Ok(ExchangeMessage::Rejected {
            extra: extra_fields(&channel, &object),
            channel,
        }),
        Some(WsEvent::Snapshot) => decode_snapshot(channel, object),
        Some(WsEvent::Updated) => decode_update(channel, object),
    }
}

/// Everything except the reserved control fields, stringified in wire
/// order. `action` is only a control field off the trading channel, where
/// rejections need it to correlate with the failed command.
fn extra_fields(channel: &str, object: &Map<String, Value>) -> Option<ExtraFields> {
    let reserved: &[&str] = if channel == ChannelId::Trading.as_str() {
        &["event", "channel", "seqnum"]
    } else {
        &["action", "event", "channel", "seqnum"]
    };

    let fields: Vec<(String, String)> = object
        .iter()
        .filter(|(key, _)| !reserved.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), scalar_string(value)))
        .collect();

    if fields.is_empty() {
        None
    } else {
        Some(ExtraFields(fields))
    }
}

fn scalar_string(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => number.to_string(),
        other => other.to_string(),
    }
}

fn decode_snapshot(
    channel: String,
    object: Map<String, Value>,
) -> Result<ExchangeMessage, DecodeError> {
    let snapshot = match ChannelId::from_name(&channel) {
        Some(ChannelId::Trading) => Snapshot::Trading(typed(ChannelId::Trading, object)?),
        Some(ChannelId::Balances) => Snapshot::Balances(typed(ChannelId::Balances, object)?),
        Some(ChannelId::Symbols) => Snapshot::Symbols(typed(ChannelId::Symbols, object)?),
        Some(ChannelId::L2) => Snapshot::L2(typed(ChannelId::L2, object)?),
        Some(ChannelId::L3) => Snapshot::L3(typed(ChannelId::L3, object)?),
        Some(ChannelId::Ticker) => Snapshot::Ticker(typed(ChannelId::Ticker, object)?),
        _ => {
            return Ok(ExchangeMessage::Generic {
                channel,
                raw: object,
            });
        }
    };
    Ok(ExchangeMessage::Snapshot(snapshot))
}

fn decode_update(
    channel: String,
    object: Map<String, Value>,
) -> Result<ExchangeMessage, DecodeError> {
    let update = match ChannelId::from_name(&channel) {
        Some(ChannelId::Trading) => Update::Trading(typed(ChannelId::Trading, object)?),
        Some(ChannelId::Symbols) => Update::Symbols(typed(ChannelId::Symbols, object)?),
        Some(ChannelId::L2) => Update::L2(typed(ChannelId::L2, object)?),
        Some(ChannelId::L3) => Update::L3(typed(ChannelId::L3, object)?),
        Some(ChannelId::Trades) => Update::Trades(typed(ChannelId::Trades, object)?),
        Some(ChannelId::Heartbeat) => Update::Heartbeat(typed(ChannelId::Heartbeat, object)?),
        Some(ChannelId::Prices) => Update::Prices(typed(ChannelId::Prices, object)?),
        Some(ChannelId::Ticker) => Update::Ticker(typed(ChannelId::Ticker, object)?),
        _ => {
            return Ok(ExchangeMessage::Generic {
                channel,
                raw: object,
            });
        }
    };
    Ok(ExchangeMessage::Update(update))
}

/// Deserialize a channel payload from the whole envelope object; control
/// fields are simply ignored by the payload structs.
fn typed<T: DeserializeOwned>(channel: ChannelId, object: Map<String, Value>) -> Result<T, DecodeError> {
    serde_json::from_value(Value::Object(object))
        .map_err(|source| DecodeError::Schema { channel, source })
}
