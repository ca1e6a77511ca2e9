//! The base record every Graph entity type composes.

use odata_serialization::{
    AdditionalData, Parsable, ParseNode, Serializable, SerializationError, SerializationWriter,
};

/// Identity base shared by all entity types.
///
/// Concrete entity types hold an `Entity` by value; the additional-data map
/// for the whole record lives here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Entity {
    /// The unique identifier for an entity. Read-only.
    pub id: Option<String>,
    /// The wire discriminator naming the concrete schema type.
    pub odata_type: Option<String>,
    /// Wire fields not described by the known schema, preserved for
    /// round-trip fidelity.
    pub additional_data: AdditionalData,
}

impl Entity {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh base tagged with a concrete type's discriminator string.
    pub fn with_odata_type(odata_type: &str) -> Self {
        Self {
            odata_type: Some(odata_type.to_owned()),
            ..Self::default()
        }
    }
}

impl Serializable for Entity {
    fn serialize<W: SerializationWriter>(&self, writer: &mut W) -> Result<(), SerializationError> {
        writer.write_string_value("id", self.id.as_deref())?;
        writer.write_string_value("@odata.type", self.odata_type.as_deref())?;
        writer.write_additional_data(&self.additional_data)
    }
}

impl Parsable for Entity {
    fn new_record() -> Self {
        Self::new()
    }

    fn deserialize_field<N: ParseNode>(
        &mut self,
        name: &str,
        node: &N,
    ) -> Result<bool, SerializationError> {
        match name {
            "id" => self.id = node.get_string_value()?,
            "@odata.type" => self.odata_type = node.get_string_value()?,
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}
