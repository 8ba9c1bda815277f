use serde::{Deserialize, Serialize};

/// Execution instruction modifiers for order placement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExecInst {
    /// Post-only: reject the order instead of taking liquidity
    #[serde(rename = "ALO")]
    AddLiquidityOnly,
}

impl ExecInst {
    /// Wire value used by the exchange
    pub fn as_str(&self) -> &'static str {
        match self {
            ExecInst::AddLiquidityOnly => "ALO",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_values() {
        assert_eq!(
            serde_json::to_string(&ExecInst::AddLiquidityOnly).unwrap(),
            "\"ALO\""
        );
        assert_eq!(
            serde_json::from_str::<ExecInst>("\"ALO\"").unwrap(),
            ExecInst::AddLiquidityOnly
        );
    }
}
