//! Error types surfaced by the parse-node and serialization-writer layer.

use thiserror::Error;

/// A single-field decode or encode failure.
///
/// The first error aborts the surrounding record and bubbles up unchanged;
/// there is no partial-record recovery.
#[derive(Debug, Error)]
pub enum SerializationError {
    #[error("expected {expected} value, found {found}")]
    UnexpectedType {
        expected: &'static str,
        found: &'static str,
    },
    #[error(transparent)]
    Enum(#[from] EnumParseError),
    #[error("invalid timestamp `{0}`")]
    InvalidDateTime(String),
    #[error("invalid base64 content: {0}")]
    InvalidBase64(#[from] base64::DecodeError),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failure to map a wire string onto a closed enum.
///
/// Evolvable enums never produce this; they absorb unrecognized strings
/// into their `Unrecognized` arm instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown {type_name} value: {value}")]
pub struct EnumParseError {
    pub type_name: &'static str,
    pub value: String,
}

impl EnumParseError {
    pub fn new(type_name: &'static str, value: impl Into<String>) -> Self {
        Self {
            type_name,
            value: value.into(),
        }
    }
}
