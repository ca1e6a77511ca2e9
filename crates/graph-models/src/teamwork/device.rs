//! A Teams-enabled device enrolled in the tenant.

use chrono::{DateTime, Utc};
use odata_serialization::{
    AdditionalData, Parsable, ParseNode, Serializable, SerializationError, SerializationWriter,
};

use super::{
    TeamworkDeviceActivityState, TeamworkDeviceConfiguration, TeamworkDeviceHealthStatus,
    TeamworkDeviceType, TeamworkHardwareDetail, TeamworkUserIdentity,
};
use crate::Entity;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TeamworkDevice {
    pub entity: Entity,
    /// The activity state of the device.
    pub activity_state: Option<TeamworkDeviceActivityState>,
    /// The company asset tag assigned by the admin on the device.
    pub company_asset_tag: Option<String>,
    /// The configuration document of the device.
    pub configuration: Option<TeamworkDeviceConfiguration>,
    /// The UTC date and time when the device was enrolled to the tenant.
    pub created_date_time: Option<DateTime<Utc>>,
    /// The signed-in user on the device.
    pub current_user: Option<TeamworkUserIdentity>,
    /// The kind of Teams hardware.
    pub device_type: Option<TeamworkDeviceType>,
    /// Hardware properties of the device.
    pub hardware_detail: Option<TeamworkHardwareDetail>,
    /// The health status of the device.
    pub health_status: Option<TeamworkDeviceHealthStatus>,
    /// The UTC date and time when the device detail was last modified.
    pub last_modified_date_time: Option<DateTime<Utc>>,
    /// The notes added by the admin to the device.
    pub notes: Option<String>,
}

impl TeamworkDevice {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Serializable for TeamworkDevice {
    fn serialize<W: SerializationWriter>(&self, writer: &mut W) -> Result<(), SerializationError> {
        self.entity.serialize(writer)?;
        writer.write_enum_value("activityState", self.activity_state.as_ref())?;
        writer.write_string_value("companyAssetTag", self.company_asset_tag.as_deref())?;
        writer.write_object_value("configuration", self.configuration.as_ref())?;
        writer.write_datetime_value("createdDateTime", self.created_date_time.as_ref())?;
        writer.write_object_value("currentUser", self.current_user.as_ref())?;
        writer.write_enum_value("deviceType", self.device_type.as_ref())?;
        writer.write_object_value("hardwareDetail", self.hardware_detail.as_ref())?;
        writer.write_enum_value("healthStatus", self.health_status.as_ref())?;
        writer.write_datetime_value(
            "lastModifiedDateTime",
            self.last_modified_date_time.as_ref(),
        )?;
        writer.write_string_value("notes", self.notes.as_deref())
    }
}

impl Parsable for TeamworkDevice {
    fn new_record() -> Self {
        Self::new()
    }

    fn deserialize_field<N: ParseNode>(
        &mut self,
        name: &str,
        node: &N,
    ) -> Result<bool, SerializationError> {
        match name {
            "activityState" => self.activity_state = node.get_enum_value()?,
            "companyAssetTag" => self.company_asset_tag = node.get_string_value()?,
            "configuration" => self.configuration = node.get_object_value()?,
            "createdDateTime" => self.created_date_time = node.get_datetime_value()?,
            "currentUser" => self.current_user = node.get_object_value()?,
            "deviceType" => self.device_type = node.get_enum_value()?,
            "hardwareDetail" => self.hardware_detail = node.get_object_value()?,
            "healthStatus" => self.health_status = node.get_enum_value()?,
            "lastModifiedDateTime" => {
                self.last_modified_date_time = node.get_datetime_value()?
            }
            "notes" => self.notes = node.get_string_value()?,
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
