//! Client-facing event callbacks

use crate::channels::ChannelId;
use crate::error::TransportError;
use crate::messages::{ExtraFields, Snapshot, Update};

/// Event callbacks invoked by the routing layer and the client façade.
///
/// Every method defaults to a no-op so implementors only pick what they
/// need. All callbacks run synchronously on the thread delivering the
/// inbound frame, in arrival order.
pub trait EventListener: Send + Sync {
    /// Subscription acknowledged by the exchange
    fn on_subscribe(&self, _channel: ChannelId, _extra: Option<&ExtraFields>) {}

    /// Unsubscription acknowledged by the exchange
    fn on_unsubscribe(&self, _channel: ChannelId, _extra: Option<&ExtraFields>) {}

    /// A command on the channel was rejected; for trading rejections the
    /// extra fields carry `action`, `clOrdID`/`orderID` and `text` for
    /// correlating with the failed command
    fn on_rejection(&self, _channel: ChannelId, _extra: Option<&ExtraFields>) {}

    /// Full-state payload, sent once after subscribing
    fn on_snapshot(&self, _channel: ChannelId, _snapshot: &Snapshot) {}

    /// Incremental payload, sent on each subsequent change
    fn on_update(&self, _channel: ChannelId, _update: &Update) {}

    /// Catch-all for frames no channel handler claimed
    fn on_message(&self, _text: &str) {}

    /// Transport lifecycle, forwarded unmodified
    fn on_connect(&self) {}

    fn on_disconnect(&self, _code: u16, _reason: &str, _remote: bool) {}

    fn on_error(&self, _error: &TransportError) {}
}
