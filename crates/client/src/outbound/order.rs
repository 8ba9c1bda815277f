//! Trading commands and the order constraint checks
//!
//! Placing an order runs a per-order-type rule set before anything is
//! encoded; every violation is an [`InvalidArgument`] naming the field,
//! raised at the call site with no network activity.
//!
//! | ordType   | price     | stopPrice | timeInForce | execInst |
//! |-----------|-----------|-----------|-------------|----------|
//! | limit     | positive  | none/zero | any         | any      |
//! | market    | none/zero | none/zero | not GTD     | any      |
//! | stop      | none/zero | positive  | GTC or GTD  | none     |
//! | stopLimit | positive  | positive  | GTC or GTD  | none     |

use chrono::{NaiveDate, Utc};
use mercury_core::{ExecInst, OrderType, Price, Quantity, Side, Symbol, TimeInForce};
use rust_decimal::Decimal;

use crate::error::InvalidArgument;
use crate::outbound::CommandArgs;

/// Outbound actions on the trading channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TradingAction {
    PlaceOrder,
    PlaceMarginOrder,
    CancelOrder,
    CancelAllOrders,
    ListLiveOrders,
    MarginOrderDetails,
}

impl TradingAction {
    /// Wire value used by the exchange
    pub fn as_str(&self) -> &'static str {
        match self {
            TradingAction::PlaceOrder => "NewOrderSingle",
            TradingAction::PlaceMarginOrder => "NewOrderSingleMargin",
            TradingAction::CancelOrder => "CancelOrderRequest",
            TradingAction::CancelAllOrders => "OrderMassCancelRequest",
            TradingAction::ListLiveOrders => "OrderMassStatusRequest",
            TradingAction::MarginOrderDetails => "PositionMarginDetails",
        }
    }
}

/// Longest client order id the exchange accepts
pub const MAX_CLIENT_ORDER_ID_LEN: usize = 20;

/// Margin parameters for a leveraged order
#[derive(Debug, Clone, PartialEq)]
pub struct MarginParams {
    pub collateral_currency: String,
    pub leverage_ratio: Decimal,
}

impl Default for MarginParams {
    fn default() -> Self {
        Self {
            collateral_currency: "USD".to_string(),
            leverage_ratio: Decimal::ONE,
        }
    }
}

/// Caller-supplied parameters for placing an order.
///
/// Transient: constructed per call, validated, turned into a wire map and
/// discarded. The exchange-held order's lifecycle is observed only
/// through inbound trading payloads.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderRequest {
    pub client_order_id: String,
    pub symbol: Symbol,
    pub order_type: OrderType,
    pub side: Side,
    pub quantity: Quantity,
    pub price: Option<Price>,
    pub stop_price: Option<Price>,
    pub time_in_force: TimeInForce,
    pub min_quantity: Option<Quantity>,
    pub expire_date: Option<NaiveDate>,
    pub exec_inst: Option<ExecInst>,
    pub margin: Option<MarginParams>,
}

impl OrderRequest {
    fn new(
        client_order_id: impl Into<String>,
        symbol: impl Into<Symbol>,
        order_type: OrderType,
        side: Side,
        quantity: Quantity,
    ) -> Self {
        Self {
            client_order_id: client_order_id.into(),
            symbol: symbol.into(),
            order_type,
            side,
            quantity,
            price: None,
            stop_price: None,
            time_in_force: TimeInForce::GTC,
            min_quantity: None,
            expire_date: None,
            exec_inst: None,
            margin: None,
        }
    }

    /// Create a new limit order request
    pub fn limit(
        client_order_id: impl Into<String>,
        symbol: impl Into<Symbol>,
        side: Side,
        quantity: Quantity,
        price: Price,
    ) -> Self {
        let mut request = Self::new(client_order_id, symbol, OrderType::Limit, side, quantity);
        request.price = Some(price);
        request
    }

    /// Create a new market order request
    pub fn market(
        client_order_id: impl Into<String>,
        symbol: impl Into<Symbol>,
        side: Side,
        quantity: Quantity,
    ) -> Self {
        Self::new(client_order_id, symbol, OrderType::Market, side, quantity)
    }

    /// Create a new stop order request
    pub fn stop(
        client_order_id: impl Into<String>,
        symbol: impl Into<Symbol>,
        side: Side,
        quantity: Quantity,
        stop_price: Price,
    ) -> Self {
        let mut request = Self::new(client_order_id, symbol, OrderType::Stop, side, quantity);
        request.stop_price = Some(stop_price);
        request
    }

    /// Create a new stop-limit order request
    pub fn stop_limit(
        client_order_id: impl Into<String>,
        symbol: impl Into<Symbol>,
        side: Side,
        quantity: Quantity,
        price: Price,
        stop_price: Price,
    ) -> Self {
        let mut request = Self::new(client_order_id, symbol, OrderType::StopLimit, side, quantity);
        request.price = Some(price);
        request.stop_price = Some(stop_price);
        request
    }

    pub fn with_price(mut self, price: Price) -> Self {
        self.price = Some(price);
        self
    }

    pub fn with_time_in_force(mut self, time_in_force: TimeInForce) -> Self {
        self.time_in_force = time_in_force;
        self
    }

    pub fn with_min_quantity(mut self, min_quantity: Quantity) -> Self {
        self.min_quantity = Some(min_quantity);
        self
    }

    pub fn with_expire_date(mut self, expire_date: NaiveDate) -> Self {
        self.expire_date = Some(expire_date);
        self
    }

    pub fn with_exec_inst(mut self, exec_inst: ExecInst) -> Self {
        self.exec_inst = Some(exec_inst);
        self
    }

    pub fn with_margin(mut self, margin: MarginParams) -> Self {
        self.margin = Some(margin);
        self
    }

    /// Wire action selected by the margin flag
    pub fn action(&self) -> TradingAction {
        if self.margin.is_some() {
            TradingAction::PlaceMarginOrder
        } else {
            TradingAction::PlaceOrder
        }
    }

    /// Run the full constraint check against the current UTC date
    pub fn validate(&self) -> Result<(), InvalidArgument> {
        self.validate_at(Utc::now().date_naive())
    }

    /// Constraint check with an injectable "today" (prefer this in tests)
    pub fn validate_at(&self, today: NaiveDate) -> Result<(), InvalidArgument> {
        if self.client_order_id.chars().count() > MAX_CLIENT_ORDER_ID_LEN {
            return Err(InvalidArgument::ClientOrderIdTooLong(MAX_CLIENT_ORDER_ID_LEN));
        }
        enforce_positive(Some(self.quantity), "quantity")?;

        match self.order_type {
            OrderType::Limit => limit_rules(self)?,
            OrderType::Market => market_rules(self)?,
            OrderType::Stop => stop_rules(self)?,
            OrderType::StopLimit => stop_limit_rules(self)?,
        }

        if self.time_in_force == TimeInForce::GTD {
            match self.expire_date {
                Some(date) if date >= today => {}
                _ => return Err(InvalidArgument::ExpireDateMissingOrPast),
            }
        } else if self.expire_date.is_some() {
            return Err(InvalidArgument::MustBeNull("expireDate"));
        }

        if self.time_in_force == TimeInForce::IOC {
            enforce_positive(self.min_quantity, "minQuantity")?;
        }

        Ok(())
    }

    /// Validate and build the wire argument map against the current UTC
    /// date, omitting every optional field that was not supplied
    pub fn wire_args(&self) -> Result<CommandArgs, InvalidArgument> {
        self.wire_args_at(Utc::now().date_naive())
    }

    /// Validate and build the wire argument map with an injectable "today"
    pub fn wire_args_at(&self, today: NaiveDate) -> Result<CommandArgs, InvalidArgument> {
        self.validate_at(today)?;

        let mut args = CommandArgs::new()
            .arg("clOrdID", self.client_order_id.as_str())
            .arg("symbol", self.symbol.as_str())
            .arg("side", self.side.as_str())
            .arg("ordType", self.order_type.as_str())
            .arg("timeInForce", self.time_in_force.as_str())
            .arg("orderQty", self.quantity);
        if let Some(price) = self.price {
            args.insert("price", price);
        }
        if let Some(stop_price) = self.stop_price {
            args.insert("stopPx", stop_price);
        }
        if let Some(min_quantity) = self.min_quantity {
            args.insert("minQty", min_quantity);
        }
        if let Some(expire_date) = self.expire_date {
            args.insert("expireDate", wire_date(expire_date));
        }
        if let Some(exec_inst) = self.exec_inst {
            args.insert("execInst", exec_inst.as_str());
        }
        if let Some(margin) = &self.margin {
            args.insert("collateralCurrency", margin.collateral_currency.as_str());
            args.insert("leverageRatio", margin.leverage_ratio);
        }
        Ok(args)
    }
}

// One rule set per order type: each covers the type's full row of the
// constraint table (price, stopPrice, timeInForce, execInst).

fn limit_rules(request: &OrderRequest) -> Result<(), InvalidArgument> {
    enforce_positive(request.price, "price")?;
    enforce_null_or_zero(request.stop_price, "stopPrice")
}

fn market_rules(request: &OrderRequest) -> Result<(), InvalidArgument> {
    enforce_null_or_zero(request.price, "price")?;
    enforce_null_or_zero(request.stop_price, "stopPrice")?;
    if request.time_in_force == TimeInForce::GTD {
        return Err(InvalidArgument::TimeInForceInvalid);
    }
    Ok(())
}

fn stop_rules(request: &OrderRequest) -> Result<(), InvalidArgument> {
    enforce_null_or_zero(request.price, "price")?;
    enforce_positive(request.stop_price, "stopPrice")?;
    enforce_tif_in(request.time_in_force)?;
    enforce_no_exec_inst(request.exec_inst)
}

fn stop_limit_rules(request: &OrderRequest) -> Result<(), InvalidArgument> {
    enforce_positive(request.price, "price")?;
    enforce_positive(request.stop_price, "stopPrice")?;
    enforce_tif_in(request.time_in_force)?;
    enforce_no_exec_inst(request.exec_inst)
}

fn enforce_positive(value: Option<Decimal>, field: &'static str) -> Result<(), InvalidArgument> {
    match value {
        Some(value) if value > Decimal::ZERO => Ok(()),
        _ => Err(InvalidArgument::MustBePositive(field)),
    }
}

fn enforce_null_or_zero(value: Option<Decimal>, field: &'static str) -> Result<(), InvalidArgument> {
    match value {
        None => Ok(()),
        Some(value) if value.is_zero() => Ok(()),
        _ => Err(InvalidArgument::MustBeNullOrZero(field)),
    }
}

fn enforce_tif_in(time_in_force: TimeInForce) -> Result<(), InvalidArgument> {
    match time_in_force {
        TimeInForce::GTC | TimeInForce::GTD => Ok(()),
        _ => Err(InvalidArgument::TimeInForceMustBeIn("GTC, GTD")),
    }
}

fn enforce_no_exec_inst(exec_inst: Option<ExecInst>) -> Result<(), InvalidArgument> {
    match exec_inst {
        None => Ok(()),
        Some(_) => Err(InvalidArgument::MustBeNull("execInst")),
    }
}

/// Numeric YYYYMMDD form for the wire
fn wire_date(date: NaiveDate) -> i64 {
    use chrono::Datelike;
    i64::from(date.year()) * 10_000 + i64::from(date.month()) * 100 + i64::from(date.day())
}

/// `CancelOrderRequest` arguments
pub fn cancel_order_args(order_id: &str) -> CommandArgs {
    CommandArgs::new().arg("orderID", order_id)
}

/// `OrderMassCancelRequest` arguments; cancels everything when no symbol
/// filter is given
pub fn cancel_all_orders_args(symbol: Option<&str>) -> CommandArgs {
    match symbol {
        Some(symbol) => CommandArgs::new().arg("symbol", symbol),
        None => CommandArgs::new(),
    }
}

/// `PositionMarginDetails` lookup; every field is required and there are
/// no cross-field constraints
#[derive(Debug, Clone, PartialEq)]
pub struct MarginDetailsRequest {
    pub request_id: String,
    pub symbol: Symbol,
    pub collateral_currency: String,
    pub side: Side,
    pub amount: Decimal,
    pub leverage_ratio: Decimal,
}

impl MarginDetailsRequest {
    pub fn wire_args(&self) -> CommandArgs {
        CommandArgs::new()
            .arg("requestId", self.request_id.as_str())
            .arg("symbol", self.symbol.as_str())
            .arg("collateralCurrency", self.collateral_currency.as_str())
            .arg("side", self.side.as_str())
            .arg("amount", self.amount)
            .arg("leverageRatio", self.leverage_ratio)
    }
}
