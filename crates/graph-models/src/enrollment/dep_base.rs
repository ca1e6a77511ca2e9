//! Shared base for Apple DEP (automated device enrollment) profiles.

use odata_serialization::{
    AdditionalData, Parsable, ParseNode, Serializable, SerializationError, SerializationWriter,
};

use super::EnrollmentProfile;
use crate::Entity;

/// Setup-assistant configuration common to DEP iOS and macOS profiles.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DepEnrollmentBaseProfile {
    pub enrollment_profile: EnrollmentProfile,
    /// Indicates if Apple id setup pane is disabled.
    pub apple_id_disabled: Option<bool>,
    /// Indicates if Apple pay setup pane is disabled.
    pub apple_pay_disabled: Option<bool>,
    /// URL for setup assistant login.
    pub configuration_web_url: Option<bool>,
    /// Sets a literal or name pattern.
    pub device_name_template: Option<String>,
    /// Indicates if diagnostics setup pane is disabled.
    pub diagnostics_disabled: Option<bool>,
    /// Indicates if displaytone setup screen is disabled.
    pub display_tone_setup_disabled: Option<bool>,
    /// All the enabled skip keys as strings.
    pub enabled_skip_keys: Option<Vec<String>>,
    /// Indicates if this is the default profile.
    pub is_default: Option<bool>,
    /// Indicates if the profile is mandatory.
    pub is_mandatory: Option<bool>,
    /// Indicates if Location service setup pane is disabled.
    pub location_disabled: Option<bool>,
    /// Indicates if privacy screen is disabled.
    pub privacy_pane_disabled: Option<bool>,
    /// Indicates if the profile removal option is disabled.
    pub profile_removal_disabled: Option<bool>,
    /// Indicates if Restore setup pane is blocked.
    pub restore_blocked: Option<bool>,
    /// Indicates if screen timeout setup is disabled.
    pub screen_time_screen_disabled: Option<bool>,
    /// Indicates if siri setup pane is disabled.
    pub siri_disabled: Option<bool>,
    /// Supervised mode, true to enable, false otherwise.
    pub supervised_mode_enabled: Option<bool>,
    /// Support department information.
    pub support_department: Option<String>,
    /// Support phone number.
    pub support_phone_number: Option<String>,
    /// Indicates if 'Terms and Conditions' setup pane is disabled.
    pub terms_and_conditions_disabled: Option<bool>,
    /// Indicates if touch id setup pane is disabled.
    pub touch_id_disabled: Option<bool>,
}

impl DepEnrollmentBaseProfile {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.depEnrollmentBaseProfile";

    pub fn new() -> Self {
        Self {
            enrollment_profile: EnrollmentProfile {
                entity: Entity::with_odata_type(Self::ODATA_TYPE),
                ..EnrollmentProfile::default()
            },
            ..Self::default()
        }
    }
}

impl Serializable for DepEnrollmentBaseProfile {
    fn serialize<W: SerializationWriter>(&self, writer: &mut W) -> Result<(), SerializationError> {
        self.enrollment_profile.serialize(writer)?;
        writer.write_bool_value("appleIdDisabled", self.apple_id_disabled)?;
        writer.write_bool_value("applePayDisabled", self.apple_pay_disabled)?;
        writer.write_bool_value("configurationWebUrl", self.configuration_web_url)?;
        writer.write_string_value("deviceNameTemplate", self.device_name_template.as_deref())?;
        writer.write_bool_value("diagnosticsDisabled", self.diagnostics_disabled)?;
        writer.write_bool_value("displayToneSetupDisabled", self.display_tone_setup_disabled)?;
        writer.write_collection_of_string_values(
            "enabledSkipKeys",
            self.enabled_skip_keys.as_deref(),
        )?;
        writer.write_bool_value("isDefault", self.is_default)?;
        writer.write_bool_value("isMandatory", self.is_mandatory)?;
        writer.write_bool_value("locationDisabled", self.location_disabled)?;
        writer.write_bool_value("privacyPaneDisabled", self.privacy_pane_disabled)?;
        writer.write_bool_value("profileRemovalDisabled", self.profile_removal_disabled)?;
        writer.write_bool_value("restoreBlocked", self.restore_blocked)?;
        writer.write_bool_value("screenTimeScreenDisabled", self.screen_time_screen_disabled)?;
        writer.write_bool_value("siriDisabled", self.siri_disabled)?;
        writer.write_bool_value("supervisedModeEnabled", self.supervised_mode_enabled)?;
        writer.write_string_value("supportDepartment", self.support_department.as_deref())?;
        writer.write_string_value("supportPhoneNumber", self.support_phone_number.as_deref())?;
        writer.write_bool_value(
            "termsAndConditionsDisabled",
            self.terms_and_conditions_disabled,
        )?;
        writer.write_bool_value("touchIdDisabled", self.touch_id_disabled)
    }
}

impl Parsable for DepEnrollmentBaseProfile {
    fn new_record() -> Self {
        Self::new()
    }

    fn deserialize_field<N: ParseNode>(
        &mut self,
        name: &str,
        node: &N,
    ) -> Result<bool, SerializationError> {
        match name {
            "appleIdDisabled" => self.apple_id_disabled = node.get_bool_value()?,
            "applePayDisabled" => self.apple_pay_disabled = node.get_bool_value()?,
            "configurationWebUrl" => self.configuration_web_url = node.get_bool_value()?,
            "deviceNameTemplate" => self.device_name_template = node.get_string_value()?,
            "diagnosticsDisabled" => self.diagnostics_disabled = node.get_bool_value()?,
            "displayToneSetupDisabled" => {
                self.display_tone_setup_disabled = node.get_bool_value()?
            }
            "enabledSkipKeys" => {
                self.enabled_skip_keys = node.get_collection_of_string_values()?
            }
            "isDefault" => self.is_default = node.get_bool_value()?,
            "isMandatory" => self.is_mandatory = node.get_bool_value()?,
            "locationDisabled" => self.location_disabled = node.get_bool_value()?,
            "privacyPaneDisabled" => self.privacy_pane_disabled = node.get_bool_value()?,
            "profileRemovalDisabled" => self.profile_removal_disabled = node.get_bool_value()?,
            "restoreBlocked" => self.restore_blocked = node.get_bool_value()?,
            "screenTimeScreenDisabled" => {
                self.screen_time_screen_disabled = node.get_bool_value()?
            }
            "siriDisabled" => self.siri_disabled = node.get_bool_value()?,
            "supervisedModeEnabled" => self.supervised_mode_enabled = node.get_bool_value()?,
            "supportDepartment" => self.support_department = node.get_string_value()?,
            "supportPhoneNumber" => self.support_phone_number = node.get_string_value()?,
            "termsAndConditionsDisabled" => {
                self.terms_and_conditions_disabled = node.get_bool_value()?
            }
            "touchIdDisabled" => self.touch_id_disabled = node.get_bool_value()?,
            _ => return self.enrollment_profile.deserialize_field(name, node),
        }
        Ok(true)
    }

    fn additional_data(&self) -> &AdditionalData {
        self.enrollment_profile.additional_data()
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        self.enrollment_profile.additional_data_mut()
    }
}
