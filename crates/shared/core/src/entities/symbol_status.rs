use serde::{Deserialize, Serialize};

/// Trading status of a listed symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymbolStatus {
    Open,
    Closed,
    Suspended,
    Halt,
    HaltFreeze,
}

impl SymbolStatus {
    /// Returns true if orders can currently be placed on the symbol
    pub fn is_tradeable(&self) -> bool {
        matches!(self, SymbolStatus::Open)
    }
}
