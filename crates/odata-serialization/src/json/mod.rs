//! JSON backing for the parse-node and serialization-writer seams.

mod parse_node;
mod writer;

pub use parse_node::JsonParseNode;
pub use writer::JsonSerializationWriter;

use serde_json::Value;

use crate::{parse_object, Parsable, Serializable, SerializationError};

/// Decodes a record from an in-memory JSON value.
pub fn from_json_value<T: Parsable>(value: &Value) -> Result<T, SerializationError> {
    parse_object(&JsonParseNode::new(value))
}

/// Decodes a record from raw JSON bytes.
pub fn from_json_slice<T: Parsable>(bytes: &[u8]) -> Result<T, SerializationError> {
    let value: Value = serde_json::from_slice(bytes)?;
    from_json_value(&value)
}

/// Encodes a record into an in-memory JSON value.
pub fn to_json_value<T: Serializable>(value: &T) -> Result<Value, SerializationError> {
    let mut writer = JsonSerializationWriter::new();
    value.serialize(&mut writer)?;
    Ok(writer.into_value())
}

/// Encodes a record into raw JSON bytes.
pub fn to_json_vec<T: Serializable>(value: &T) -> Result<Vec<u8>, SerializationError> {
    Ok(serde_json::to_vec(&to_json_value(value)?)?)
}
