//! Abstract writer, the mirror image of [`ParseNode`](crate::ParseNode).

use std::fmt::Display;

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::{AdditionalData, Serializable, SerializationError};

/// Typed field setters accumulating an outgoing payload.
///
/// Every setter takes an `Option`; `None` writes nothing, so an encoded
/// record decodes back to exactly the fields that were set. No validation
/// happens at write time; values go out as-is.
pub trait SerializationWriter {
    fn write_string_value(
        &mut self,
        name: &str,
        value: Option<&str>,
    ) -> Result<(), SerializationError>;

    fn write_bool_value(
        &mut self,
        name: &str,
        value: Option<bool>,
    ) -> Result<(), SerializationError>;

    fn write_i32_value(
        &mut self,
        name: &str,
        value: Option<i32>,
    ) -> Result<(), SerializationError>;

    fn write_i64_value(
        &mut self,
        name: &str,
        value: Option<i64>,
    ) -> Result<(), SerializationError>;

    fn write_f64_value(
        &mut self,
        name: &str,
        value: Option<f64>,
    ) -> Result<(), SerializationError>;

    /// RFC 3339, UTC designator `Z`.
    fn write_datetime_value(
        &mut self,
        name: &str,
        value: Option<&DateTime<Utc>>,
    ) -> Result<(), SerializationError>;

    /// Base64-encoded.
    fn write_bytes_value(
        &mut self,
        name: &str,
        value: Option<&[u8]>,
    ) -> Result<(), SerializationError>;

    /// Writes a raw wire value unchanged. Backs the additional-data merge.
    fn write_raw_value(&mut self, name: &str, value: &Value)
        -> Result<(), SerializationError>;

    fn write_object_value<T: Serializable>(
        &mut self,
        name: &str,
        value: Option<&T>,
    ) -> Result<(), SerializationError>;

    fn write_collection_of_object_values<T: Serializable>(
        &mut self,
        name: &str,
        values: Option<&[T]>,
    ) -> Result<(), SerializationError>;

    fn write_collection_of_string_values(
        &mut self,
        name: &str,
        values: Option<&[String]>,
    ) -> Result<(), SerializationError>;

    fn write_enum_value<E: Display>(
        &mut self,
        name: &str,
        value: Option<&E>,
    ) -> Result<(), SerializationError> {
        match value {
            Some(v) => self.write_string_value(name, Some(&v.to_string())),
            None => Ok(()),
        }
    }

    fn write_additional_data(
        &mut self,
        data: &AdditionalData,
    ) -> Result<(), SerializationError> {
        for (name, value) in data {
            self.write_raw_value(name, value)?;
        }
        Ok(())
    }
}
