//! Trading channel payload types

use mercury_core::{OrderStatus, OrderType, Price, Quantity, Side, Symbol, TimeInForce, Timestamp};
use rust_decimal::Decimal;
use serde::Deserialize;

/// An exchange-held order as reported on the trading channel.
///
/// The client holds no authoritative order state; these are observations
/// of the server-side lifecycle (pending -> open -> partial/filled/
/// cancelled/expired/rejected).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ExchangeOrder {
    #[serde(rename = "orderID")]
    pub order_id: String,
    #[serde(rename = "clOrdID")]
    pub client_order_id: String,
    pub symbol: Symbol,
    pub side: Side,
    #[serde(rename = "ordType")]
    pub order_type: OrderType,
    #[serde(rename = "orderQty")]
    pub quantity: Quantity,
    #[serde(rename = "leavesQty")]
    pub remaining_quantity: Quantity,
    #[serde(rename = "cumQty")]
    pub filled_quantity: Quantity,
    #[serde(rename = "avgPx")]
    pub average_fill_price: Price,
    #[serde(rename = "ordStatus")]
    pub status: OrderStatus,
    #[serde(rename = "timeInForce")]
    pub time_in_force: TimeInForce,
    /// Human-readable status text (e.g. "New order", "Insufficient Balance")
    pub text: String,
    #[serde(rename = "execType")]
    pub exec_type: char,
    #[serde(rename = "execID")]
    pub exec_id: String,
    #[serde(rename = "transactTime")]
    pub transact_time: Timestamp,
    #[serde(rename = "lastPx")]
    pub last_fill_price: Price,
    #[serde(rename = "lastShares")]
    pub last_fill_quantity: Quantity,
    #[serde(rename = "tradeId")]
    pub trade_id: String,
    pub fee: Decimal,
    #[serde(rename = "price")]
    pub limit_price: Option<Price>,
    #[serde(rename = "stopPx")]
    pub stop_price: Option<Price>,
    #[serde(rename = "marginOrder", default)]
    pub margin_order: bool,
    #[serde(rename = "collateralCurrency")]
    pub collateral_currency: Option<String>,
    #[serde(rename = "markPrice")]
    pub mark_price: Option<Price>,
    #[serde(rename = "interestAmount")]
    pub interest_amount: Option<Decimal>,
    #[serde(rename = "positionMargin")]
    pub position_margin: Option<Decimal>,
    #[serde(rename = "marginCallPrice")]
    pub margin_call_price: Option<Price>,
    #[serde(rename = "liquidationPrice")]
    pub liquidation_price: Option<Price>,
}

/// Live orders snapshot, sent once after subscribing to trading
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TradingSnapshot {
    pub orders: Vec<ExchangeOrder>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    const OPEN_ORDER: &str = r#"{
        "orderID":"12891851020","clOrdID":"78502a08-c8f1-4eff-b",
        "symbol":"BTC-USD","side":"sell","ordType":"limit",
        "orderQty":0.0005,"leavesQty":0.0005,"cumQty":0.0,"avgPx":0.0,
        "ordStatus":"open","timeInForce":"GTC","text":"New order",
        "execType":"0","execID":"11321871",
        "transactTime":"2019-08-13T11:30:06.100Z",
        "lastPx":0.0,"lastShares":0.0,"tradeId":"0","fee":0.0,
        "price":15000.0,"marginOrder":false
    }"#;

    #[test]
    fn test_order_deserializes_with_renames() {
        let order: ExchangeOrder = serde_json::from_str(OPEN_ORDER).unwrap();
        assert_eq!(order.order_id, "12891851020");
        assert_eq!(order.client_order_id, "78502a08-c8f1-4eff-b");
        assert_eq!(order.side, Side::Sell);
        assert_eq!(order.order_type, OrderType::Limit);
        assert_eq!(order.quantity, dec!(0.0005));
        assert_eq!(order.status, OrderStatus::Open);
        assert_eq!(order.exec_type, '0');
        assert_eq!(order.limit_price, Some(dec!(15000)));
        assert_eq!(order.stop_price, None);
        assert!(!order.margin_order);
        assert!(order.mark_price.is_none());
    }

    #[test]
    fn test_margin_fields_deserialize_when_present() {
        let json = OPEN_ORDER.replace(
            r#""marginOrder":false"#,
            r#""marginOrder":true,"collateralCurrency":"USD","markPrice":11265.2,
               "interestAmount":0.0,"positionMargin":56.3,
               "marginCallPrice":13500.5,"liquidationPrice":14000.1"#,
        );
        let order: ExchangeOrder = serde_json::from_str(&json).unwrap();
        assert!(order.margin_order);
        assert_eq!(order.collateral_currency.as_deref(), Some("USD"));
        assert_eq!(order.mark_price, Some(dec!(11265.2)));
        assert_eq!(order.liquidation_price, Some(dec!(14000.1)));
    }

    #[test]
    fn test_missing_required_field_is_an_error() {
        let json = OPEN_ORDER.replace(r#""symbol":"BTC-USD","#, "");
        assert!(serde_json::from_str::<ExchangeOrder>(&json).is_err());
    }
}
