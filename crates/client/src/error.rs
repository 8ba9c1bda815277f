//! Error types for the client crate

use thiserror::Error;

use crate::channels::ChannelId;

/// Failures while decoding one inbound envelope.
///
/// These indicate a protocol contract violation with the exchange and are
/// surfaced to the caller; unrecognized events/channels are not errors and
/// degrade to generic messages instead.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("malformed JSON: {0}")]
    Malformed(#[source] serde_json::Error),

    #[error("envelope is not a JSON object")]
    NotAnObject,

    #[error("envelope has no channel field")]
    MissingChannel,

    #[error("schema mismatch on channel {channel}: {source}")]
    Schema {
        channel: ChannelId,
        #[source]
        source: serde_json::Error,
    },
}

/// Malformed outbound arguments, rejected before any network activity
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidArgument {
    #[error("{0} must be positive")]
    MustBePositive(&'static str),

    #[error("{0} must be null or zero")]
    MustBeNullOrZero(&'static str),

    #[error("{0} must be null")]
    MustBeNull(&'static str),

    #[error("clientOrderId must not be longer than {0} characters")]
    ClientOrderIdTooLong(usize),

    #[error("timeInForce must be one of {0}")]
    TimeInForceMustBeIn(&'static str),

    #[error("invalid timeInForce for this order type")]
    TimeInForceInvalid,

    #[error("expireDate is missing or in the past")]
    ExpireDateMissingOrPast,

    #[error("unknown channel: {0}")]
    UnknownChannel(String),
}

impl InvalidArgument {
    /// Name of the offending field
    pub fn field(&self) -> &'static str {
        match self {
            InvalidArgument::MustBePositive(field) => field,
            InvalidArgument::MustBeNullOrZero(field) => field,
            InvalidArgument::MustBeNull(field) => field,
            InvalidArgument::ClientOrderIdTooLong(_) => "clientOrderId",
            InvalidArgument::TimeInForceMustBeIn(_) | InvalidArgument::TimeInForceInvalid => {
                "timeInForce"
            }
            InvalidArgument::ExpireDateMissingOrPast => "expireDate",
            InvalidArgument::UnknownChannel(_) => "channel",
        }
    }
}

/// Transport-level errors reported by the outbound connection port
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("connection failed: {0}")]
    Connection(String),

    #[error("send failed: {0}")]
    Send(String),

    #[error("connection closed")]
    Closed,
}

/// Top-level client errors
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] InvalidArgument),

    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    #[error("transport error: {0}")]
    Transport(#[from] TransportError),
}
