//! Error details attached to a synchronization job run.

use odata_serialization::{
    AdditionalData, Parsable, ParseNode, Serializable, SerializationError, SerializationWriter,
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SynchronizationError {
    /// The error code, for example `AzureDirectoryB2BManagementPolicyCheckFailure`.
    pub code: Option<String>,
    /// The error message.
    pub message: Option<String>,
    /// Whether the tenant can take action to resolve the error.
    pub tenant_actionable: Option<bool>,
    pub odata_type: Option<String>,
    pub additional_data: AdditionalData,
}

impl SynchronizationError {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Serializable for SynchronizationError {
    fn serialize<W: SerializationWriter>(&self, writer: &mut W) -> Result<(), SerializationError> {
        writer.write_string_value("code", self.code.as_deref())?;
        writer.write_string_value("message", self.message.as_deref())?;
        writer.write_bool_value("tenantActionable", self.tenant_actionable)?;
        writer.write_string_value("@odata.type", self.odata_type.as_deref())?;
        writer.write_additional_data(&self.additional_data)
    }
}

impl Parsable for SynchronizationError {
    fn new_record() -> Self {
        Self::new()
    }

    fn deserialize_field<N: ParseNode>(
        &mut self,
        name: &str,
        node: &N,
    ) -> Result<bool, SerializationError> {
        match name {
            "code" => self.code = node.get_string_value()?,
            "message" => self.message = node.get_string_value()?,
            "tenantActionable" => self.tenant_actionable = node.get_bool_value()?,
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
