//! Outbound command encoding
//!
//! Every outbound frame is `{"action": .., "channel": .., ...scalar args}`.
//! Argument values come from a closed scalar set validated at the type
//! level; there is no implicit coercion anywhere on the way out.

pub mod order;

use rust_decimal::Decimal;
use serde_json::{Map, Value};

use crate::channels::ChannelId;

pub const ACTION_SUBSCRIBE: &str = "subscribe";
pub const ACTION_UNSUBSCRIBE: &str = "unsubscribe";

/// Closed set of scalar values allowed as outbound command arguments
#[derive(Debug, Clone, PartialEq)]
pub enum ArgValue {
    Str(String),
    Int(i64),
    /// Sent as an exact decimal string so no precision is lost on the wire
    Num(Decimal),
    Bool(bool),
    Char(char),
}

impl ArgValue {
    /// JSON value as it goes on the wire
    fn to_json(&self) -> Value {
        match self {
            ArgValue::Str(text) => Value::String(text.clone()),
            ArgValue::Int(number) => Value::Number((*number).into()),
            ArgValue::Num(decimal) => Value::String(decimal.to_string()),
            ArgValue::Bool(flag) => Value::Bool(*flag),
            ArgValue::Char(character) => Value::String(character.to_string()),
        }
    }
}

impl From<&str> for ArgValue {
    fn from(value: &str) -> Self {
        ArgValue::Str(value.to_string())
    }
}

impl From<String> for ArgValue {
    fn from(value: String) -> Self {
        ArgValue::Str(value)
    }
}

impl From<i64> for ArgValue {
    fn from(value: i64) -> Self {
        ArgValue::Int(value)
    }
}

impl From<i32> for ArgValue {
    fn from(value: i32) -> Self {
        ArgValue::Int(value.into())
    }
}

impl From<Decimal> for ArgValue {
    fn from(value: Decimal) -> Self {
        ArgValue::Num(value)
    }
}

impl From<bool> for ArgValue {
    fn from(value: bool) -> Self {
        ArgValue::Bool(value)
    }
}

impl From<char> for ArgValue {
    fn from(value: char) -> Self {
        ArgValue::Char(value)
    }
}

/// Ordered argument map for one outbound command
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommandArgs(Vec<(String, ArgValue)>);

impl CommandArgs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style append
    pub fn arg(mut self, key: impl Into<String>, value: impl Into<ArgValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ArgValue>) {
        self.0.push((key.into(), value.into()));
    }

    pub fn iter(&self) -> std::slice::Iter<'_, (String, ArgValue)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Build one outbound envelope; `action` and `channel` always lead
pub fn encode_command(action: &str, channel: ChannelId, args: Option<&CommandArgs>) -> String {
    let mut object = Map::new();
    object.insert("action".to_string(), Value::String(action.to_string()));
    object.insert(
        "channel".to_string(),
        Value::String(channel.as_str().to_string()),
    );
    if let Some(args) = args {
        for (key, value) in args.iter() {
            object.insert(key.clone(), value.to_json());
        }
    }
    Value::Object(object).to_string()
}
