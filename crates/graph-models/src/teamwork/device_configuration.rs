//! Configuration document of a Teams-enabled device.

use chrono::{DateTime, Utc};
use odata_serialization::{
    AdditionalData, Parsable, ParseNode, Serializable, SerializationError, SerializationWriter,
};

use super::TeamworkSystemConfiguration;
use crate::Entity;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TeamworkDeviceConfiguration {
    pub entity: Entity,
    /// The UTC date and time when the device configuration document was created.
    pub created_date_time: Option<DateTime<Utc>>,
    /// The UTC date and time when the device configuration was last modified.
    pub last_modified_date_time: Option<DateTime<Utc>>,
    /// The system configuration. Not applicable for Teams Rooms-enabled devices.
    pub system_configuration: Option<TeamworkSystemConfiguration>,
}

impl TeamworkDeviceConfiguration {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Serializable for TeamworkDeviceConfiguration {
    fn serialize<W: SerializationWriter>(&self, writer: &mut W) -> Result<(), SerializationError> {
        self.entity.serialize(writer)?;
        writer.write_datetime_value("createdDateTime", self.created_date_time.as_ref())?;
        writer.write_datetime_value(
            "lastModifiedDateTime",
            self.last_modified_date_time.as_ref(),
        )?;
        writer.write_object_value("systemConfiguration", self.system_configuration.as_ref())
    }
}

impl Parsable for TeamworkDeviceConfiguration {
    fn new_record() -> Self {
        Self::new()
    }

    fn deserialize_field<N: ParseNode>(
        &mut self,
        name: &str,
        node: &N,
    ) -> Result<bool, SerializationError> {
        match name {
            "createdDateTime" => self.created_date_time = node.get_datetime_value()?,
            "lastModifiedDateTime" => {
                self.last_modified_date_time = node.get_datetime_value()?
            }
            "systemConfiguration" => self.system_configuration = node.get_object_value()?,
            _ => return self.entity.deserialize_field(name, node),
        }
        Ok(true)
    }

    fn additional_data(&self) -> &AdditionalData {
        self.entity.additional_data()
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        self.entity.additional_data_mut()
    }
}
