use odata_serialization::{
    AdditionalData, Parsable, ParseNode, Serializable, SerializationError, SerializationWriter,
};

use super::TeamworkUserIdentityType;

/// Identity of a user signed in on a Teams-enabled device.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TeamworkUserIdentity {
    /// Unique identifier for the identity.
    pub id: Option<String>,
    /// Display name of the identity.
    pub display_name: Option<String>,
    /// Type of user.
    pub user_identity_type: Option<TeamworkUserIdentityType>,
    pub odata_type: Option<String>,
    pub additional_data: AdditionalData,
}

impl TeamworkUserIdentity {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Serializable for TeamworkUserIdentity {
    fn serialize<W: SerializationWriter>(&self, writer: &mut W) -> Result<(), SerializationError> {
        writer.write_string_value("id", self.id.as_deref())?;
        writer.write_string_value("displayName", self.display_name.as_deref())?;
        writer.write_enum_value("userIdentityType", self.user_identity_type.as_ref())?;
        writer.write_string_value("@odata.type", self.odata_type.as_deref())?;
        writer.write_additional_data(&self.additional_data)
    }
}

impl Parsable for TeamworkUserIdentity {
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
            "displayName" => self.display_name = node.get_string_value()?,
            "userIdentityType" => self.user_identity_type = node.get_enum_value()?,
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
