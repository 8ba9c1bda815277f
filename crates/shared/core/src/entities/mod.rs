mod exec_inst;
mod order_status;
mod order_type;
mod side;
mod symbol_status;
mod time_in_force;

pub use exec_inst::ExecInst;
pub use order_status::OrderStatus;
pub use order_type::OrderType;
pub use side::Side;
pub use symbol_status::SymbolStatus;
pub use time_in_force::TimeInForce;
