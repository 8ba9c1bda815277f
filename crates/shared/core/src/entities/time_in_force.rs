use serde::{Deserialize, Serialize};

/// Time-in-force instructions for order validity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeInForce {
    /// Good Till Canceled: order remains active until explicitly canceled
    GTC,

    /// Good Till Date: order remains active until the specified date
    GTD,

    /// Immediate or Cancel: execute immediately (partially or fully) and cancel unfilled portion
    IOC,

    /// Fill or Kill: execute immediately and completely, or cancel entire order
    FOK,
}

impl TimeInForce {
    /// Wire value used by the exchange
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeInForce::GTC => "GTC",
            TimeInForce::GTD => "GTD",
            TimeInForce::IOC => "IOC",
            TimeInForce::FOK => "FOK",
        }
    }

    /// Returns true if partial fills are allowed
    pub fn allows_partial_fill(&self) -> bool {
        !matches!(self, TimeInForce::FOK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_values() {
        assert_eq!(serde_json::to_string(&TimeInForce::GTD).unwrap(), "\"GTD\"");
        assert_eq!(
            serde_json::from_str::<TimeInForce>("\"IOC\"").unwrap(),
            TimeInForce::IOC
        );
        assert_eq!(TimeInForce::FOK.as_str(), "FOK");
    }

    #[test]
    fn test_partial_fill() {
        assert!(TimeInForce::GTC.allows_partial_fill());
        assert!(TimeInForce::IOC.allows_partial_fill());
        assert!(!TimeInForce::FOK.allows_partial_fill());
    }
}
