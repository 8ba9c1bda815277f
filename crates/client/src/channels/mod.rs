//! Channel identities, the fixed registry, and message routing
//!
//! The ten known channels form a closed table built once at client
//! construction and read-only afterwards. Free-form channel strings exist
//! only at the wire boundary; everything behind the decoder is keyed by
//! [`ChannelId`].

use std::fmt;
use std::str::FromStr;

use crate::error::InvalidArgument;
use crate::listener::EventListener;
use crate::messages::ExchangeMessage;
use crate::outbound::{ACTION_SUBSCRIBE, ACTION_UNSUBSCRIBE, CommandArgs, encode_command};

/// Identity of a known channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelId {
    Auth,
    Balances,
    Trading,
    Symbols,
    L2,
    L3,
    Trades,
    Heartbeat,
    Prices,
    Ticker,
}

impl ChannelId {
    /// Every known channel, in registry order
    pub const ALL: [ChannelId; 10] = [
        ChannelId::Auth,
        ChannelId::Balances,
        ChannelId::Trading,
        ChannelId::Symbols,
        ChannelId::L2,
        ChannelId::L3,
        ChannelId::Trades,
        ChannelId::Heartbeat,
        ChannelId::Prices,
        ChannelId::Ticker,
    ];

    /// Wire name of the channel
    pub fn as_str(&self) -> &'static str {
        match self {
            ChannelId::Auth => "auth",
            ChannelId::Balances => "balances",
            ChannelId::Trading => "trading",
            ChannelId::Symbols => "symbols",
            ChannelId::L2 => "l2",
            ChannelId::L3 => "l3",
            ChannelId::Trades => "trades",
            ChannelId::Heartbeat => "heartbeat",
            ChannelId::Prices => "prices",
            ChannelId::Ticker => "ticker",
        }
    }

    /// Resolve a wire channel name; `None` for anything unknown
    pub fn from_name(name: &str) -> Option<ChannelId> {
        match name {
            "auth" => Some(ChannelId::Auth),
            "balances" => Some(ChannelId::Balances),
            "trading" => Some(ChannelId::Trading),
            "symbols" => Some(ChannelId::Symbols),
            "l2" => Some(ChannelId::L2),
            "l3" => Some(ChannelId::L3),
            "trades" => Some(ChannelId::Trades),
            "heartbeat" => Some(ChannelId::Heartbeat),
            "prices" => Some(ChannelId::Prices),
            "ticker" => Some(ChannelId::Ticker),
            _ => None,
        }
    }
}

impl fmt::Display for ChannelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChannelId {
    type Err = InvalidArgument;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        ChannelId::from_name(name).ok_or_else(|| InvalidArgument::UnknownChannel(name.to_string()))
    }
}

/// Outcome of routing one decoded message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoutingOutcome {
    /// The owning channel dispatched exactly one listener callback
    Handled,
    /// The channel is known but the handler did not claim the message
    /// (generic envelope on a registered channel)
    NotHandled,
    /// No registered channel owns the message's channel name
    Unrouted,
}

/// A registered channel: immutable identity plus message interpretation.
/// Handlers hold no mutable state beyond their identity.
pub struct Channel {
    id: ChannelId,
}

impl Channel {
    fn new(id: ChannelId) -> Self {
        Self { id }
    }

    pub fn id(&self) -> ChannelId {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.id.as_str()
    }

    /// Build the subscribe envelope for this channel
    pub fn subscribe_command(&self, args: Option<&CommandArgs>) -> String {
        encode_command(ACTION_SUBSCRIBE, self.id, args)
    }

    /// Build the unsubscribe envelope for this channel
    pub fn unsubscribe_command(&self, args: Option<&CommandArgs>) -> String {
        encode_command(ACTION_UNSUBSCRIBE, self.id, args)
    }

    /// Map a routed message to exactly one listener callback.
    /// Returns false when the message is a generic envelope the handler
    /// has no callback for.
    fn on_message(&self, msg: &ExchangeMessage, listener: &dyn EventListener) -> bool {
        match msg {
            ExchangeMessage::Subscribed { extra, .. } => {
                listener.on_subscribe(self.id, extra.as_ref());
                true
            }
            ExchangeMessage::Unsubscribed { extra, .. } => {
                listener.on_unsubscribe(self.id, extra.as_ref());
                true
            }
            ExchangeMessage::Rejected { extra, .. } => {
                listener.on_rejection(self.id, extra.as_ref());
                true
            }
            ExchangeMessage::Snapshot(snapshot) => {
                listener.on_snapshot(self.id, snapshot);
                true
            }
            ExchangeMessage::Update(update) => {
                listener.on_update(self.id, update);
                true
            }
            ExchangeMessage::Generic { .. } => false,
        }
    }
}

/// Fixed table of the ten known channels, built once and never mutated.
/// Safe to share across any number of concurrent readers.
pub struct ChannelRegistry {
    channels: [Channel; 10],
}

impl ChannelRegistry {
    pub fn new() -> Self {
        Self {
            channels: ChannelId::ALL.map(Channel::new),
        }
    }

    /// Look up a channel by identity
    pub fn get(&self, id: ChannelId) -> &Channel {
        &self.channels[id as usize]
    }

    /// Route one decoded message to its owning channel.
    ///
    /// Every message yields exactly one of: one listener callback
    /// (`Handled`), or a catch-all forward by the caller (`NotHandled` /
    /// `Unrouted`). Never both.
    pub fn route(&self, msg: &ExchangeMessage, listener: &dyn EventListener) -> RoutingOutcome {
        match ChannelId::from_name(msg.channel()) {
            None => RoutingOutcome::Unrouted,
            Some(id) => {
                if self.get(id).on_message(msg, listener) {
                    RoutingOutcome::Handled
                } else {
                    RoutingOutcome::NotHandled
                }
            }
        }
    }
}

impl Default for ChannelRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::decode;
    use std::sync::Mutex;

    #[test]
    fn test_name_round_trip_for_all_channels() {
        for id in ChannelId::ALL {
            assert_eq!(ChannelId::from_name(id.as_str()), Some(id));
            assert_eq!(id.as_str().parse::<ChannelId>().unwrap(), id);
        }
        assert_eq!(ChannelId::from_name("weather"), None);
        assert!(matches!(
            "weather".parse::<ChannelId>(),
            Err(InvalidArgument::UnknownChannel(name)) if name == "weather"
        ));
    }

    #[test]
    fn test_registry_lookup_matches_identity() {
        let registry = ChannelRegistry::new();
        for id in ChannelId::ALL {
            assert_eq!(registry.get(id).id(), id);
            assert_eq!(registry.get(id).name(), id.as_str());
        }
    }

    #[test]
    fn test_subscribe_command_shape() {
        let registry = ChannelRegistry::new();
        assert_eq!(
            registry.get(ChannelId::Heartbeat).subscribe_command(None),
            r#"{"action":"subscribe","channel":"heartbeat"}"#
        );
        let args = CommandArgs::new().arg("symbol", "BTC-USD");
        assert_eq!(
            registry.get(ChannelId::L2).unsubscribe_command(Some(&args)),
            r#"{"action":"unsubscribe","channel":"l2","symbol":"BTC-USD"}"#
        );
    }

    /// Records which callback fired, for routing assertions
    #[derive(Default)]
    struct Recorder {
        events: Mutex<Vec<String>>,
    }

    impl EventListener for Recorder {
        fn on_subscribe(&self, channel: ChannelId, _extra: Option<&crate::messages::ExtraFields>) {
            self.events.lock().unwrap().push(format!("subscribe:{}", channel));
        }

        fn on_update(&self, channel: ChannelId, _update: &crate::messages::Update) {
            self.events.lock().unwrap().push(format!("update:{}", channel));
        }
    }

    #[test]
    fn test_route_dispatches_exactly_one_callback() {
        let registry = ChannelRegistry::new();
        let recorder = Recorder::default();

        let msg = decode(r#"{"event":"subscribed","channel":"heartbeat","seqnum":0}"#).unwrap();
        assert_eq!(registry.route(&msg, &recorder), RoutingOutcome::Handled);

        let msg = decode(
            r#"{"event":"updated","channel":"heartbeat","seqnum":1,"timestamp":"2019-05-31T08:36:45.666Z"}"#,
        )
        .unwrap();
        assert_eq!(registry.route(&msg, &recorder), RoutingOutcome::Handled);

        let events = recorder.events.lock().unwrap();
        assert_eq!(*events, vec!["subscribe:heartbeat", "update:heartbeat"]);
    }

    #[test]
    fn test_unknown_channel_never_reaches_a_callback() {
        let registry = ChannelRegistry::new();
        let recorder = Recorder::default();

        let msg = decode(r#"{"event":"subscribed","channel":"weather","seqnum":0}"#).unwrap();
        assert_eq!(registry.route(&msg, &recorder), RoutingOutcome::Unrouted);
        assert!(recorder.events.lock().unwrap().is_empty());
    }

    #[test]
    fn test_generic_on_known_channel_is_not_handled() {
        let registry = ChannelRegistry::new();
        let recorder = Recorder::default();

        let msg = decode(r#"{"event":"bogus","channel":"trading","seqnum":2}"#).unwrap();
        assert_eq!(registry.route(&msg, &recorder), RoutingOutcome::NotHandled);
        assert!(recorder.events.lock().unwrap().is_empty());
    }
}
