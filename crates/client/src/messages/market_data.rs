//! Market data payload types
//!
//! Field names are bit-exact with the wire format; money fields use
//! `Decimal` so no precision is lost on the way in.

use std::collections::HashMap;

use mercury_core::{Price, Quantity, Side, Symbol, SymbolStatus, Timestamp};
use rust_decimal::Decimal;
use serde::Deserialize;

/// One currency balance row on the balances channel
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Balance {
    pub currency: String,
    pub balance: Quantity,
    pub available: Quantity,
    pub balance_local: Quantity,
    pub available_local: Quantity,
    pub rate: Price,
}

/// Full balances snapshot (one row per currency)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BalancesSnapshot {
    pub balances: Vec<Balance>,
}

/// Listing details for one tradeable symbol
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SymbolDetails {
    pub base_currency: String,
    pub base_currency_scale: u32,
    pub counter_currency: String,
    pub counter_currency_scale: u32,
    pub min_price_increment: u64,
    pub min_price_increment_scale: u32,
    pub min_order_size: u64,
    pub min_order_size_scale: u32,
    pub max_order_size: u64,
    pub max_order_size_scale: u32,
    pub lot_size: u64,
    pub lot_size_scale: u32,
    pub auction_price: Price,
    pub auction_size: Quantity,
    pub auction_time: String,
    pub imbalance: Decimal,
    pub status: SymbolStatus,
    pub id: i32,
}

/// Symbols snapshot: every listed symbol keyed by name
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SymbolsSnapshot {
    pub symbols: HashMap<Symbol, SymbolDetails>,
}

/// Incremental change to one symbol's listing details
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SymbolsUpdate {
    pub symbol: Symbol,
    #[serde(flatten)]
    pub details: SymbolDetails,
}

/// One aggregated L2 price level
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct L2Entry {
    /// Number of orders at this level
    pub num: u64,
    #[serde(rename = "px")]
    pub price: Price,
    #[serde(rename = "qty")]
    pub quantity: Quantity,
}

/// One individual L3 order
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct L3Entry {
    /// Exchange order id
    pub id: String,
    #[serde(rename = "px")]
    pub price: Price,
    #[serde(rename = "qty")]
    pub quantity: Quantity,
}

/// Both sides of an order book, used for snapshots and deltas alike.
/// A delta entry with quantity zero removes the level/order.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OrderBook<E> {
    pub symbol: Symbol,
    pub bids: Vec<E>,
    pub asks: Vec<E>,
}

/// L2 book payload (aggregated levels)
pub type L2Book = OrderBook<L2Entry>;

/// L3 book payload (individual orders)
pub type L3Book = OrderBook<L3Entry>;

/// One executed trade print
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TradeUpdate {
    pub symbol: Symbol,
    pub timestamp: Timestamp,
    pub side: Side,
    #[serde(rename = "qty")]
    pub quantity: Quantity,
    pub price: Price,
    pub trade_id: String,
}

/// Server heartbeat
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HeartbeatUpdate {
    pub timestamp: Timestamp,
}

/// One OHLCV candle on the prices channel.
///
/// The wire carries a bare 6-element array:
/// `[bucket start (epoch seconds), open, high, low, close, volume]`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PricesUpdate {
    pub symbol: Symbol,
    pub price: [Decimal; 6],
}

impl PricesUpdate {
    /// Candle bucket start, epoch seconds as sent
    pub fn start_time(&self) -> Decimal {
        self.price[0]
    }

    pub fn open(&self) -> Price {
        self.price[1]
    }

    pub fn high(&self) -> Price {
        self.price[2]
    }

    pub fn low(&self) -> Price {
        self.price[3]
    }

    pub fn close(&self) -> Price {
        self.price[4]
    }

    pub fn volume(&self) -> Quantity {
        self.price[5]
    }
}

/// Ticker fields, identical for snapshot and update
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Ticker {
    pub symbol: Symbol,
    pub last_trade_price: Option<Price>,
    pub volume_24h: Option<Quantity>,
    pub price_24h: Option<Price>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_l2_entry_renames() {
        let entry: L2Entry =
            serde_json::from_str(r#"{"num":2,"px":8723.45,"qty":1.45}"#).unwrap();
        assert_eq!(entry.num, 2);
        assert_eq!(entry.price, dec!(8723.45));
        assert_eq!(entry.quantity, dec!(1.45));
    }

    #[test]
    fn test_l3_entry_carries_order_id() {
        let entry: L3Entry =
            serde_json::from_str(r#"{"id":"1234","px":8723.45,"qty":0.1}"#).unwrap();
        assert_eq!(entry.id, "1234");
        assert_eq!(entry.quantity, dec!(0.1));
    }

    #[test]
    fn test_candle_accessors() {
        let update: PricesUpdate = serde_json::from_str(
            r#"{"symbol":"BTC-USD","price":[1559039640,8697.24,8700.98,8697.27,8700.98,0.431]}"#,
        )
        .unwrap();
        assert_eq!(update.start_time(), dec!(1559039640));
        assert_eq!(update.open(), dec!(8697.24));
        assert_eq!(update.high(), dec!(8700.98));
        assert_eq!(update.low(), dec!(8697.27));
        assert_eq!(update.close(), dec!(8700.98));
        assert_eq!(update.volume(), dec!(0.431));
    }

    #[test]
    fn test_ticker_fields_are_optional() {
        let ticker: Ticker = serde_json::from_str(r#"{"symbol":"BTC-USD"}"#).unwrap();
        assert_eq!(ticker.symbol, "BTC-USD");
        assert!(ticker.last_trade_price.is_none());
        assert!(ticker.volume_24h.is_none());
        assert!(ticker.price_24h.is_none());
    }

    #[test]
    fn test_balance_exact_decimals() {
        let balance: Balance = serde_json::from_str(
            r#"{"currency":"BTC","balance":0.00366963,"available":0.00266963,
                "balance_local":38.746779155,"available_local":28.188009155,"rate":10558.3}"#,
        )
        .unwrap();
        assert_eq!(balance.balance, dec!(0.00366963));
        assert_eq!(balance.rate, dec!(10558.3));
    }
}
