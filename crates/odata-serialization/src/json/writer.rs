//! [`SerializationWriter`] accumulating a JSON object.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{Map, Value};

use crate::{Serializable, SerializationError, SerializationWriter};

/// A writer building one JSON object, keys in write order.
#[derive(Debug, Default)]
pub struct JsonSerializationWriter {
    map: Map<String, Value>,
}

impl JsonSerializationWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.map)
    }

    fn set(&mut self, name: &str, value: Value) {
        self.map.insert(name.to_owned(), value);
    }
}

impl SerializationWriter for JsonSerializationWriter {
    fn write_string_value(
        &mut self,
        name: &str,
        value: Option<&str>,
    ) -> Result<(), SerializationError> {
        if let Some(v) = value {
            self.set(name, Value::String(v.to_owned()));
        }
        Ok(())
    }

    fn write_bool_value(
        &mut self,
        name: &str,
        value: Option<bool>,
    ) -> Result<(), SerializationError> {
        if let Some(v) = value {
            self.set(name, Value::Bool(v));
        }
        Ok(())
    }

    fn write_i32_value(
        &mut self,
        name: &str,
        value: Option<i32>,
    ) -> Result<(), SerializationError> {
        if let Some(v) = value {
            self.set(name, Value::from(v));
        }
        Ok(())
    }

    fn write_i64_value(
        &mut self,
        name: &str,
        value: Option<i64>,
    ) -> Result<(), SerializationError> {
        if let Some(v) = value {
            self.set(name, Value::from(v));
        }
        Ok(())
    }

    fn write_f64_value(
        &mut self,
        name: &str,
        value: Option<f64>,
    ) -> Result<(), SerializationError> {
        if let Some(v) = value {
            self.set(name, Value::from(v));
        }
        Ok(())
    }

    fn write_datetime_value(
        &mut self,
        name: &str,
        value: Option<&DateTime<Utc>>,
    ) -> Result<(), SerializationError> {
        if let Some(v) = value {
            self.set(
                name,
                Value::String(v.to_rfc3339_opts(SecondsFormat::Secs, true)),
            );
        }
        Ok(())
    }

    fn write_bytes_value(
        &mut self,
        name: &str,
        value: Option<&[u8]>,
    ) -> Result<(), SerializationError> {
        if let Some(v) = value {
            self.set(name, Value::String(BASE64.encode(v)));
        }
        Ok(())
    }

    fn write_raw_value(&mut self, name: &str, value: &Value) -> Result<(), SerializationError> {
        self.set(name, value.clone());
        Ok(())
    }

    fn write_object_value<T: Serializable>(
        &mut self,
        name: &str,
        value: Option<&T>,
    ) -> Result<(), SerializationError> {
        if let Some(v) = value {
            let mut child = JsonSerializationWriter::new();
            v.serialize(&mut child)?;
            self.set(name, child.into_value());
        }
        Ok(())
    }

    fn write_collection_of_object_values<T: Serializable>(
        &mut self,
        name: &str,
        values: Option<&[T]>,
    ) -> Result<(), SerializationError> {
        if let Some(values) = values {
            let mut items = Vec::with_capacity(values.len());
            for v in values {
                let mut child = JsonSerializationWriter::new();
                v.serialize(&mut child)?;
                items.push(child.into_value());
            }
            self.set(name, Value::Array(items));
        }
        Ok(())
    }

    fn write_collection_of_string_values(
        &mut self,
        name: &str,
        values: Option<&[String]>,
    ) -> Result<(), SerializationError> {
        if let Some(values) = values {
            self.set(
                name,
                Value::Array(values.iter().map(|s| Value::String(s.clone())).collect()),
            );
        }
        Ok(())
    }
}
