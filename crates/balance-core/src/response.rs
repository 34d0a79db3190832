//! Invocation responses

use crate::error::ContractError;
use bytes::Bytes;
use serde::{Serialize, Serializer};
use serde_json::Value;

/// Response status
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    /// Success (200)
    Ok,
    /// Failure (500)
    Error,
}

impl Status {
    /// Numeric status code
    pub fn code(self) -> u16 {
        match self {
            Status::Ok => 200,
            Status::Error => 500,
        }
    }
}

impl Serialize for Status {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u16(self.code())
    }
}

/// Event emitted by a successful invocation
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChaincodeEvent {
    /// Event name
    pub name: String,
    /// Event payload
    pub payload: Value,
}

/// Outcome of one invocation
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Response {
    /// Status
    pub status: Status,
    /// Error message, empty on success
    #[serde(skip_serializing_if = "String::is_empty")]
    pub message: String,
    /// Payload bytes
    #[serde(serialize_with = "serialize_payload", skip_serializing_if = "Option::is_none")]
    pub payload: Option<Bytes>,
    /// Structured error details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
    /// Emitted event
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event: Option<ChaincodeEvent>,
}

impl Response {
    /// Successful response
    pub fn success(payload: Option<Bytes>) -> Self {
        Self {
            status: Status::Ok,
            message: String::new(),
            payload,
            details: None,
            event: None,
        }
    }

    /// Error response built from a contract error
    pub fn error(err: &ContractError) -> Self {
        Self {
            status: Status::Error,
            message: err.to_string(),
            payload: None,
            details: err.details(),
            event: None,
        }
    }

    /// Attach an event
    pub fn with_event(mut self, event: Option<ChaincodeEvent>) -> Self {
        self.event = event;
        self
    }

    /// Check if the invocation succeeded
    pub fn is_ok(&self) -> bool {
        self.status == Status::Ok
    }

    /// Payload decoded as UTF-8 (lossy)
    pub fn payload_str(&self) -> Option<String> {
        self.payload
            .as_ref()
            .map(|p| String::from_utf8_lossy(p).into_owned())
    }
}

fn serialize_payload<S: Serializer>(payload: &Option<Bytes>, serializer: S) -> Result<S::Ok, S::Error> {
    match payload {
        Some(bytes) => serializer.serialize_str(&String::from_utf8_lossy(bytes)),
        None => serializer.serialize_none(),
    }
}
