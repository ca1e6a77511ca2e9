//! The model-facing seam: types that can be written to a
//! [`SerializationWriter`](crate::SerializationWriter) and rebuilt from a
//! [`ParseNode`](crate::ParseNode).

use serde_json::{Map, Value};

use crate::{ParseNode, SerializationError, SerializationWriter};

/// Open map of raw wire values not covered by a record's named fields.
///
/// Filled by the decode driver for every field the record does not claim and
/// written back verbatim on encode, so unknown fields survive a round trip.
/// Key order is preserved.
pub type AdditionalData = Map<String, Value>;

/// A value that can be written out field by field.
pub trait Serializable {
    /// Writes base-record fields first, then own fields in declaration
    /// order, then the additional-data map.
    fn serialize<W: SerializationWriter>(&self, writer: &mut W)
        -> Result<(), SerializationError>;
}

/// A record that can be rebuilt from a parse node.
pub trait Parsable: Serializable {
    /// Freshly constructed instance carrying the record's construction-time
    /// defaults (its fixed `@odata.type`, where it has one). The decode
    /// driver starts from this and fills fields in.
    fn new_record() -> Self;

    /// Decodes one wire field into the matching typed field.
    ///
    /// Returns `Ok(false)` when `name` is not part of this record's schema;
    /// the driver then routes the raw value into [`AdditionalData`]. A field
    /// that is present but null leaves the typed field unset.
    fn deserialize_field<N: ParseNode>(
        &mut self,
        name: &str,
        node: &N,
    ) -> Result<bool, SerializationError>;

    fn additional_data(&self) -> &AdditionalData;

    fn additional_data_mut(&mut self) -> &mut AdditionalData;
}
