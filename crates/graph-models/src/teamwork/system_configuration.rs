use odata_serialization::{
    AdditionalData, Parsable, ParseNode, Serializable, SerializationError, SerializationWriter,
};

/// System-level configuration of a Teams-enabled device.
///
/// `deviceLockTimeout` is an ISO 8601 duration on the wire and is kept as
/// its raw string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TeamworkSystemConfiguration {
    /// The default password for the device. Write-Only.
    pub default_password: Option<String>,
    /// The device lock timeout in seconds.
    pub device_lock_timeout: Option<String>,
    /// True if the device lock is enabled.
    pub is_device_lock_enabled: Option<bool>,
    /// True if logging is enabled.
    pub is_logging_enabled: Option<bool>,
    /// True if power saving is enabled.
    pub is_power_saving_enabled: Option<bool>,
    /// True if screen capture is enabled.
    pub is_screen_capture_enabled: Option<bool>,
    /// True if silent mode is enabled.
    pub is_silent_mode_enabled: Option<bool>,
    /// The language option for the device.
    pub language: Option<String>,
    /// The pin that unlocks the device. Write-Only.
    pub lock_pin: Option<String>,
    /// The logging level for the device.
    pub logging_level: Option<String>,
    pub odata_type: Option<String>,
    pub additional_data: AdditionalData,
}

impl TeamworkSystemConfiguration {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Serializable for TeamworkSystemConfiguration {
    fn serialize<W: SerializationWriter>(&self, writer: &mut W) -> Result<(), SerializationError> {
        writer.write_string_value("defaultPassword", self.default_password.as_deref())?;
        writer.write_string_value("deviceLockTimeout", self.device_lock_timeout.as_deref())?;
        writer.write_bool_value("isDeviceLockEnabled", self.is_device_lock_enabled)?;
        writer.write_bool_value("isLoggingEnabled", self.is_logging_enabled)?;
        writer.write_bool_value("isPowerSavingEnabled", self.is_power_saving_enabled)?;
        writer.write_bool_value("isScreenCaptureEnabled", self.is_screen_capture_enabled)?;
        writer.write_bool_value("isSilentModeEnabled", self.is_silent_mode_enabled)?;
        writer.write_string_value("language", self.language.as_deref())?;
        writer.write_string_value("lockPin", self.lock_pin.as_deref())?;
        writer.write_string_value("loggingLevel", self.logging_level.as_deref())?;
        writer.write_string_value("@odata.type", self.odata_type.as_deref())?;
        writer.write_additional_data(&self.additional_data)
    }
}

impl Parsable for TeamworkSystemConfiguration {
    fn new_record() -> Self {
        Self::new()
    }

    fn deserialize_field<N: ParseNode>(
        &mut self,
        name: &str,
        node: &N,
    ) -> Result<bool, SerializationError> {
        match name {
            "defaultPassword" => self.default_password = node.get_string_value()?,
            "deviceLockTimeout" => self.device_lock_timeout = node.get_string_value()?,
            "isDeviceLockEnabled" => self.is_device_lock_enabled = node.get_bool_value()?,
            "isLoggingEnabled" => self.is_logging_enabled = node.get_bool_value()?,
            "isPowerSavingEnabled" => self.is_power_saving_enabled = node.get_bool_value()?,
            "isScreenCaptureEnabled" => {
                self.is_screen_capture_enabled = node.get_bool_value()?
            }
            "isSilentModeEnabled" => self.is_silent_mode_enabled = node.get_bool_value()?,
            "language" => self.language = node.get_string_value()?,
            "lockPin" => self.lock_pin = node.get_string_value()?,
            "loggingLevel" => self.logging_level = node.get_string_value()?,
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
