use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// Price value - uses Decimal so wire precision is never lost
pub type Price = Decimal;

/// Quantity value - uses Decimal so wire precision is never lost
pub type Quantity = Decimal;

/// Timestamp in UTC
pub type Timestamp = DateTime<Utc>;

/// Symbol identifier for a tradeable instrument (e.g. "BTC-USD")
pub type Symbol = String;
