//! [`ParseNode`] over a borrowed [`serde_json::Value`].

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::{ParseNode, SerializationError};

/// A parse node borrowing one JSON value.
#[derive(Debug, Clone, Copy)]
pub struct JsonParseNode<'a> {
    value: &'a Value,
}

impl<'a> JsonParseNode<'a> {
    pub fn new(value: &'a Value) -> Self {
        Self { value }
    }

    pub fn raw(&self) -> &'a Value {
        self.value
    }

    fn mismatch(&self, expected: &'static str) -> SerializationError {
        SerializationError::UnexpectedType {
            expected,
            found: json_type_name(self.value),
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl<'a> ParseNode for JsonParseNode<'a> {
    fn get_string_value(&self) -> Result<Option<String>, SerializationError> {
        match self.value {
            Value::Null => Ok(None),
            Value::String(s) => Ok(Some(s.clone())),
            _ => Err(self.mismatch("string")),
        }
    }

    fn get_bool_value(&self) -> Result<Option<bool>, SerializationError> {
        match self.value {
            Value::Null => Ok(None),
            Value::Bool(b) => Ok(Some(*b)),
            _ => Err(self.mismatch("boolean")),
        }
    }

    fn get_i32_value(&self) -> Result<Option<i32>, SerializationError> {
        match self.value {
            Value::Null => Ok(None),
            Value::Number(n) => n
                .as_i64()
                .and_then(|v| i32::try_from(v).ok())
                .map(Some)
                .ok_or_else(|| self.mismatch("i32")),
            _ => Err(self.mismatch("i32")),
        }
    }

    fn get_i64_value(&self) -> Result<Option<i64>, SerializationError> {
        match self.value {
            Value::Null => Ok(None),
            Value::Number(n) => n.as_i64().map(Some).ok_or_else(|| self.mismatch("i64")),
            _ => Err(self.mismatch("i64")),
        }
    }

    fn get_f64_value(&self) -> Result<Option<f64>, SerializationError> {
        match self.value {
            Value::Null => Ok(None),
            Value::Number(n) => n.as_f64().map(Some).ok_or_else(|| self.mismatch("f64")),
            _ => Err(self.mismatch("f64")),
        }
    }

    fn get_datetime_value(&self) -> Result<Option<DateTime<Utc>>, SerializationError> {
        match self.get_string_value()? {
            None => Ok(None),
            Some(s) => DateTime::parse_from_rfc3339(&s)
                .map(|dt| Some(dt.with_timezone(&Utc)))
                .map_err(|_| SerializationError::InvalidDateTime(s)),
        }
    }

    fn get_bytes_value(&self) -> Result<Option<Vec<u8>>, SerializationError> {
        match self.get_string_value()? {
            None => Ok(None),
            Some(s) => Ok(Some(BASE64.decode(s.as_bytes())?)),
        }
    }

    fn get_child_node(&self, name: &str) -> Result<Option<Self>, SerializationError> {
        match self.value {
            Value::Null => Ok(None),
            Value::Object(map) => Ok(map.get(name).map(JsonParseNode::new)),
            _ => Err(self.mismatch("object")),
        }
    }

    fn fields(&self) -> Result<Vec<(String, Self)>, SerializationError> {
        match self.value {
            Value::Object(map) => Ok(map
                .iter()
                .map(|(k, v)| (k.clone(), JsonParseNode::new(v)))
                .collect()),
            _ => Err(self.mismatch("object")),
        }
    }

    fn items(&self) -> Result<Option<Vec<Self>>, SerializationError> {
        match self.value {
            Value::Null => Ok(None),
            Value::Array(items) => Ok(Some(items.iter().map(JsonParseNode::new).collect())),
            _ => Err(self.mismatch("array")),
        }
    }

    fn to_raw_value(&self) -> Value {
        self.value.clone()
    }

    fn is_null(&self) -> bool {
        self.value.is_null()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn scalar_getters_pass_nulls_through() {
        let null = json!(null);
        let node = JsonParseNode::new(&null);
        assert_eq!(node.get_string_value().unwrap(), None);
        assert_eq!(node.get_bool_value().unwrap(), None);
        assert_eq!(node.get_i32_value().unwrap(), None);
        assert_eq!(node.get_i64_value().unwrap(), None);
        assert_eq!(node.get_f64_value().unwrap(), None);
        assert_eq!(node.get_datetime_value().unwrap(), None);
        assert_eq!(node.get_bytes_value().unwrap(), None);
    }

    #[test]
    fn scalar_getters_reject_wrong_types() {
        let num = json!(42);
        let node = JsonParseNode::new(&num);
        let err = node.get_string_value().unwrap_err();
        assert_eq!(err.to_string(), "expected string value, found number");

        let s = json!("x");
        let node = JsonParseNode::new(&s);
        assert!(node.get_bool_value().is_err());
        assert!(node.get_i64_value().is_err());
    }

    #[test]
    fn i32_rejects_out_of_range_numbers() {
        let big = json!(4_000_000_000_i64);
        let node = JsonParseNode::new(&big);
        assert!(node.get_i32_value().is_err());
        assert_eq!(node.get_i64_value().unwrap(), Some(4_000_000_000));
    }

    #[test]
    fn datetime_parses_rfc3339_and_normalizes_to_utc() {
        let ts = json!("2014-01-01T02:00:00+02:00");
        let node = JsonParseNode::new(&ts);
        let dt = node.get_datetime_value().unwrap().unwrap();
        assert_eq!(dt.to_rfc3339(), "2014-01-01T00:00:00+00:00");

        let bad = json!("not a time");
        let node = JsonParseNode::new(&bad);
        assert!(matches!(
            node.get_datetime_value(),
            Err(SerializationError::InvalidDateTime(_))
        ));
    }

    #[test]
    fn bytes_decode_base64() {
        let b = json!("aGVsbG8=");
        let node = JsonParseNode::new(&b);
        assert_eq!(node.get_bytes_value().unwrap().unwrap(), b"hello");
    }

    #[test]
    fn child_lookup_and_fields_preserve_wire_order() {
        let obj = json!({"b": 1, "a": 2});
        let node = JsonParseNode::new(&obj);
        assert!(node.get_child_node("a").unwrap().is_some());
        assert!(node.get_child_node("missing").unwrap().is_none());
        let names: Vec<String> = node.fields().unwrap().into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["b", "a"]);
    }
}
