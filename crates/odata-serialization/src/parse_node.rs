//! Abstract reader over a decoded wire payload.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::{EnumParseError, Parsable, SerializationError};

/// Typed accessors over one node of a decoded payload.
///
/// Every scalar getter returns `Ok(None)` both when the node is absent and
/// when it is an explicit null; a wrong wire type is an error. Implementors
/// supply the scalar getters plus structural access; object and collection
/// decoding come as provided methods on top of those.
pub trait ParseNode: Sized {
    fn get_string_value(&self) -> Result<Option<String>, SerializationError>;

    fn get_bool_value(&self) -> Result<Option<bool>, SerializationError>;

    fn get_i32_value(&self) -> Result<Option<i32>, SerializationError>;

    fn get_i64_value(&self) -> Result<Option<i64>, SerializationError>;

    fn get_f64_value(&self) -> Result<Option<f64>, SerializationError>;

    /// RFC 3339 timestamp, normalized to UTC.
    fn get_datetime_value(&self) -> Result<Option<DateTime<Utc>>, SerializationError>;

    /// Base64-encoded byte array.
    fn get_bytes_value(&self) -> Result<Option<Vec<u8>>, SerializationError>;

    /// Child node lookup by field name. Used for discriminator peeking.
    fn get_child_node(&self, name: &str) -> Result<Option<Self>, SerializationError>;

    /// The node's object entries as `(name, child)` pairs, in wire order.
    fn fields(&self) -> Result<Vec<(String, Self)>, SerializationError>;

    /// The node's array elements, or `None` if the node is null/absent.
    fn items(&self) -> Result<Option<Vec<Self>>, SerializationError>;

    /// The raw wire value, for the additional-data side channel.
    fn to_raw_value(&self) -> Value;

    fn is_null(&self) -> bool;

    fn get_enum_value<E>(&self) -> Result<Option<E>, SerializationError>
    where
        E: FromStr<Err = EnumParseError>,
    {
        match self.get_string_value()? {
            Some(s) => Ok(Some(s.parse()?)),
            None => Ok(None),
        }
    }

    fn get_object_value<T: Parsable>(&self) -> Result<Option<T>, SerializationError> {
        self.get_object_value_with(|node| parse_object(node))
    }

    /// Object decode through an explicit factory, for polymorphic nodes.
    fn get_object_value_with<T, F>(&self, factory: F) -> Result<Option<T>, SerializationError>
    where
        F: Fn(&Self) -> Result<T, SerializationError>,
    {
        if self.is_null() {
            return Ok(None);
        }
        Ok(Some(factory(self)?))
    }

    fn get_collection_of_object_values<T: Parsable>(
        &self,
    ) -> Result<Option<Vec<T>>, SerializationError> {
        self.get_collection_of_object_values_with(|node| parse_object(node))
    }

    fn get_collection_of_object_values_with<T, F>(
        &self,
        factory: F,
    ) -> Result<Option<Vec<T>>, SerializationError>
    where
        F: Fn(&Self) -> Result<T, SerializationError>,
    {
        let items = match self.items()? {
            Some(items) => items,
            None => return Ok(None),
        };
        let mut out = Vec::with_capacity(items.len());
        for item in &items {
            out.push(factory(item)?);
        }
        Ok(Some(out))
    }

    /// Null elements are skipped, so the returned vector can be shorter
    /// than the wire array. Non-string, non-null elements are an error.
    fn get_collection_of_string_values(
        &self,
    ) -> Result<Option<Vec<String>>, SerializationError> {
        let items = match self.items()? {
            Some(items) => items,
            None => return Ok(None),
        };
        let mut out = Vec::with_capacity(items.len());
        for item in &items {
            if let Some(s) = item.get_string_value()? {
                out.push(s);
            }
        }
        Ok(Some(out))
    }
}

/// Decodes a whole record from an object node.
///
/// Walks the node's fields, hands each to the record's
/// [`deserialize_field`](Parsable::deserialize_field), and accumulates every
/// unclaimed field's raw value into the record's additional data. The first
/// field error aborts the record and propagates unchanged.
pub fn parse_object<T, N>(node: &N) -> Result<T, SerializationError>
where
    T: Parsable,
    N: ParseNode,
{
    let mut value = T::new_record();
    fill_object(&mut value, node)?;
    Ok(value)
}

/// Fills an already-constructed record from an object node.
pub fn fill_object<T, N>(value: &mut T, node: &N) -> Result<(), SerializationError>
where
    T: Parsable,
    N: ParseNode,
{
    for (name, child) in node.fields()? {
        if !value.deserialize_field(&name, &child)? {
            value.additional_data_mut().insert(name, child.to_raw_value());
        }
    }
    Ok(())
}
