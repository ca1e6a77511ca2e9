use odata_serialization::{
    AdditionalData, Parsable, ParseNode, Serializable, SerializationError, SerializationWriter,
};

/// Name-count pair used in synchronization summaries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StringKeyLongValuePair {
    /// The mapped key.
    pub key: Option<String>,
    /// The mapped value.
    pub value: Option<i64>,
    pub odata_type: Option<String>,
    pub additional_data: AdditionalData,
}

impl StringKeyLongValuePair {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Serializable for StringKeyLongValuePair {
    fn serialize<W: SerializationWriter>(&self, writer: &mut W) -> Result<(), SerializationError> {
        writer.write_string_value("key", self.key.as_deref())?;
        writer.write_i64_value("value", self.value)?;
        writer.write_string_value("@odata.type", self.odata_type.as_deref())?;
        writer.write_additional_data(&self.additional_data)
    }
}

impl Parsable for StringKeyLongValuePair {
    fn new_record() -> Self {
        Self::new()
    }

    fn deserialize_field<N: ParseNode>(
        &mut self,
        name: &str,
        node: &N,
    ) -> Result<bool, SerializationError> {
        match name {
            "key" => self.key = node.get_string_value()?,
            "value" => self.value = node.get_i64_value()?,
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
