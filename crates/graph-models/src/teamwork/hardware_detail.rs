use odata_serialization::{
    AdditionalData, Parsable, ParseNode, Serializable, SerializationError, SerializationWriter,
};

/// Hardware properties of a Teams-enabled device.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TeamworkHardwareDetail {
    /// MAC addresses of the device.
    pub mac_addresses: Option<Vec<String>>,
    /// Manufacturer of the device.
    pub manufacturer: Option<String>,
    /// Model of the device.
    pub model: Option<String>,
    /// Serial number of the device.
    pub serial_number: Option<String>,
    /// Unique identifier of the device.
    pub unique_id: Option<String>,
    pub odata_type: Option<String>,
    pub additional_data: AdditionalData,
}

impl TeamworkHardwareDetail {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Serializable for TeamworkHardwareDetail {
    fn serialize<W: SerializationWriter>(&self, writer: &mut W) -> Result<(), SerializationError> {
        writer.write_collection_of_string_values("macAddresses", self.mac_addresses.as_deref())?;
        writer.write_string_value("manufacturer", self.manufacturer.as_deref())?;
        writer.write_string_value("model", self.model.as_deref())?;
        writer.write_string_value("serialNumber", self.serial_number.as_deref())?;
        writer.write_string_value("uniqueId", self.unique_id.as_deref())?;
        writer.write_string_value("@odata.type", self.odata_type.as_deref())?;
        writer.write_additional_data(&self.additional_data)
    }
}

impl Parsable for TeamworkHardwareDetail {
    fn new_record() -> Self {
        Self::new()
    }

    fn deserialize_field<N: ParseNode>(
        &mut self,
        name: &str,
        node: &N,
    ) -> Result<bool, SerializationError> {
        match name {
            "macAddresses" => self.mac_addresses = node.get_collection_of_string_values()?,
            "manufacturer" => self.manufacturer = node.get_string_value()?,
            "model" => self.model = node.get_string_value()?,
            "serialNumber" => self.serial_number = node.get_string_value()?,
            "uniqueId" => self.unique_id = node.get_string_value()?,
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
