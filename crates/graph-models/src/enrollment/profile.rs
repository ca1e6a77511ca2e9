//! The enrollment-profile base entity.

use odata_serialization::{
    AdditionalData, Parsable, ParseNode, Serializable, SerializationError, SerializationWriter,
};

use crate::Entity;

/// Base type for device enrollment profiles.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnrollmentProfile {
    pub entity: Entity,
    /// The URL of the configuration endpoint to use during enrollment.
    pub configuration_endpoint_url: Option<String>,
    /// Description of the profile.
    pub description: Option<String>,
    /// Name of the profile.
    pub display_name: Option<String>,
    /// Indicates to authenticate with Apple Setup Assistant instead of Company Portal.
    pub enable_authentication_via_company_portal: Option<bool>,
    /// Indicates that Company Portal is required on setup assistant enrolled devices.
    pub require_company_portal_on_setup_assistant_enrolled_devices: Option<bool>,
    /// Indicates if the profile requires user authentication.
    pub requires_user_authentication: Option<bool>,
}

impl EnrollmentProfile {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.enrollmentProfile";

    pub fn new() -> Self {
        Self {
            entity: Entity::with_odata_type(Self::ODATA_TYPE),
            ..Self::default()
        }
    }
}

impl Serializable for EnrollmentProfile {
    fn serialize<W: SerializationWriter>(&self, writer: &mut W) -> Result<(), SerializationError> {
        self.entity.serialize(writer)?;
        writer.write_string_value(
            "configurationEndpointUrl",
            self.configuration_endpoint_url.as_deref(),
        )?;
        writer.write_string_value("description", self.description.as_deref())?;
        writer.write_string_value("displayName", self.display_name.as_deref())?;
        writer.write_bool_value(
            "enableAuthenticationViaCompanyPortal",
            self.enable_authentication_via_company_portal,
        )?;
        writer.write_bool_value(
            "requireCompanyPortalOnSetupAssistantEnrolledDevices",
            self.require_company_portal_on_setup_assistant_enrolled_devices,
        )?;
        writer.write_bool_value(
            "requiresUserAuthentication",
            self.requires_user_authentication,
        )
    }
}

impl Parsable for EnrollmentProfile {
    fn new_record() -> Self {
        Self::new()
    }

    fn deserialize_field<N: ParseNode>(
        &mut self,
        name: &str,
        node: &N,
    ) -> Result<bool, SerializationError> {
        match name {
            "configurationEndpointUrl" => {
                self.configuration_endpoint_url = node.get_string_value()?
            }
            "description" => self.description = node.get_string_value()?,
            "displayName" => self.display_name = node.get_string_value()?,
            "enableAuthenticationViaCompanyPortal" => {
                self.enable_authentication_via_company_portal = node.get_bool_value()?
            }
            "requireCompanyPortalOnSetupAssistantEnrolledDevices" => {
                self.require_company_portal_on_setup_assistant_enrolled_devices =
                    node.get_bool_value()?
            }
            "requiresUserAuthentication" => {
                self.requires_user_authentication = node.get_bool_value()?
            }
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
