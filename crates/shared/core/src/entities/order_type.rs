use serde::{Deserialize, Serialize};

/// Order types supported by the exchange
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OrderType {
    /// Execute at specified price or better
    Limit,
    /// Execute at current market price
    Market,
    /// Market order triggered when price reaches stop price
    Stop,
    /// Limit order triggered when price reaches stop price
    StopLimit,
}

impl OrderType {
    /// Wire value used by the exchange
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderType::Limit => "limit",
            OrderType::Market => "market",
            OrderType::Stop => "stop",
            OrderType::StopLimit => "stopLimit",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_values() {
        assert_eq!(
            serde_json::to_string(&OrderType::StopLimit).unwrap(),
            "\"stopLimit\""
        );
        assert_eq!(
            serde_json::from_str::<OrderType>("\"limit\"").unwrap(),
            OrderType::Limit
        );
        assert_eq!(OrderType::Stop.as_str(), "stop");
    }
}
