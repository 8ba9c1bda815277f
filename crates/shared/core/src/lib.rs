//! Mercury Core Domain
//!
//! Pure domain vocabulary for the Mercury exchange client.
//! This crate contains no async, no I/O, and is 100% unit testable.

pub mod entities;
pub mod values;

// Re-export commonly used types at crate root
pub use entities::{ExecInst, OrderStatus, OrderType, Side, SymbolStatus, TimeInForce};
pub use values::{Price, Quantity, Symbol, Timestamp};
