use serde::{Deserialize, Serialize};

/// Order lifecycle status as reported by the exchange
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Order has been received but not yet processed
    Pending,
    /// Order is resting on the book
    Open,
    /// Order has been canceled by the user
    Cancelled,
    /// Order has been partially filled
    Partial,
    /// Order has been completely filled
    Filled,
    /// Order has expired (GTD)
    Expired,
    /// Order was rejected by the exchange
    Rejected,
}

impl OrderStatus {
    /// Returns true if the order is in a terminal state
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            OrderStatus::Cancelled
                | OrderStatus::Filled
                | OrderStatus::Expired
                | OrderStatus::Rejected
        )
    }

    /// Returns true if the order is still active
    pub fn is_active(&self) -> bool {
        matches!(
            self,
            OrderStatus::Pending | OrderStatus::Open | OrderStatus::Partial
        )
    }
}
