//! DEP enrollment profile for iOS/iPadOS devices.

use odata_serialization::{
    AdditionalData, Parsable, ParseNode, Serializable, SerializationError, SerializationWriter,
};

use super::{DepEnrollmentBaseProfile, ITunesPairingMode, ManagementCertificateWithThumbprint};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DepIosEnrollmentProfile {
    pub dep_enrollment_base_profile: DepEnrollmentBaseProfile,
    /// Indicates if Appearance screen is disabled.
    pub appearance_screen_disabled: Option<bool>,
    /// Indicates if the device will need to wait for configured confirmation.
    pub await_device_configured_confirmation: Option<bool>,
    /// Carrier URL for activating device eSIM.
    pub carrier_activation_url: Option<String>,
    /// Vpp token to deploy the Company Portal with device licensing.
    pub company_portal_vpp_token_id: Option<String>,
    /// Indicates if Device To Device Migration is disabled.
    pub device_to_device_migration_disabled: Option<bool>,
    /// Enrolls the device in a mode which enables multi user scenarios.
    pub enable_shared_ipad: Option<bool>,
    /// Enables single app mode with app-lock during enrollment.
    pub enable_single_app_enrollment_mode: Option<bool>,
    /// Indicates if Express Language screen is disabled.
    pub express_language_screen_disabled: Option<bool>,
    /// Indicates if temporary sessions is enabled.
    pub force_temporary_session: Option<bool>,
    /// Indicates if home button sensitivity screen is disabled.
    pub home_button_screen_disabled: Option<bool>,
    /// Indicates if iMessage and FaceTime screen is disabled.
    pub imessage_and_face_time_screen_disabled: Option<bool>,
    /// Pairing mode for iTunes synchronization.
    pub itunes_pairing_mode: Option<ITunesPairingMode>,
    /// Management certificates for Apple Configurator.
    pub management_certificates: Option<Vec<ManagementCertificateWithThumbprint>>,
    /// Indicates if onboarding setup screen is disabled.
    pub on_boarding_screen_disabled: Option<bool>,
    /// Indicates if Passcode setup pane is disabled.
    pub pass_code_disabled: Option<bool>,
    /// Timeout before the locked screen requires the device passcode.
    pub passcode_lock_grace_period_in_seconds: Option<i32>,
    /// Indicates if Preferred language screen is disabled.
    pub preferred_language_screen_disabled: Option<bool>,
    /// Indicates if Restore Completed screen is disabled.
    pub restore_completed_screen_disabled: Option<bool>,
    /// Indicates if Restore from Android is disabled.
    pub restore_from_android_disabled: Option<bool>,
    /// Maximum number of users that can use a shared iPad.
    pub shared_ipad_maximum_user_count: Option<i32>,
    /// Indicates if the SIMSetup screen is disabled.
    pub sim_setup_screen_disabled: Option<bool>,
    /// Indicates if the mandatory software update screen is disabled.
    pub software_update_screen_disabled: Option<bool>,
    /// Timeout of temporary session.
    pub temporary_session_timeout_in_seconds: Option<i32>,
    /// Indicates if Update Complete screen is disabled.
    pub update_complete_screen_disabled: Option<bool>,
    /// Designates the device for shared device mode scenarios.
    pub userless_shared_aad_mode_enabled: Option<bool>,
    /// Timeout of a user session.
    pub user_session_timeout_in_seconds: Option<i32>,
    /// Indicates if the watch migration screen is disabled.
    pub watch_migration_screen_disabled: Option<bool>,
    /// Indicates if Welcome screen is disabled.
    pub welcome_screen_disabled: Option<bool>,
    /// Indicates if zoom setup pane is disabled.
    pub zoom_disabled: Option<bool>,
}

impl DepIosEnrollmentProfile {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.depIOSEnrollmentProfile";

    pub fn new() -> Self {
        let mut base = DepEnrollmentBaseProfile::new();
        base.enrollment_profile.entity.odata_type = Some(Self::ODATA_TYPE.to_owned());
        Self {
            dep_enrollment_base_profile: base,
            ..Self::default()
        }
    }
}

impl Serializable for DepIosEnrollmentProfile {
    fn serialize<W: SerializationWriter>(&self, writer: &mut W) -> Result<(), SerializationError> {
        self.dep_enrollment_base_profile.serialize(writer)?;
        writer.write_bool_value("appearanceScreenDisabled", self.appearance_screen_disabled)?;
        writer.write_bool_value(
            "awaitDeviceConfiguredConfirmation",
            self.await_device_configured_confirmation,
        )?;
        writer.write_string_value("carrierActivationUrl", self.carrier_activation_url.as_deref())?;
        writer.write_string_value(
            "companyPortalVppTokenId",
            self.company_portal_vpp_token_id.as_deref(),
        )?;
        writer.write_bool_value(
            "deviceToDeviceMigrationDisabled",
            self.device_to_device_migration_disabled,
        )?;
        writer.write_bool_value("enableSharedIPad", self.enable_shared_ipad)?;
        writer.write_bool_value(
            "enableSingleAppEnrollmentMode",
            self.enable_single_app_enrollment_mode,
        )?;
        writer.write_bool_value(
            "expressLanguageScreenDisabled",
            self.express_language_screen_disabled,
        )?;
        writer.write_bool_value("forceTemporarySession", self.force_temporary_session)?;
        writer.write_bool_value("homeButtonScreenDisabled", self.home_button_screen_disabled)?;
        writer.write_bool_value(
            "iMessageAndFaceTimeScreenDisabled",
            self.imessage_and_face_time_screen_disabled,
        )?;
        writer.write_enum_value("iTunesPairingMode", self.itunes_pairing_mode.as_ref())?;
        writer.write_collection_of_object_values(
            "managementCertificates",
            self.management_certificates.as_deref(),
        )?;
        writer.write_bool_value("onBoardingScreenDisabled", self.on_boarding_screen_disabled)?;
        writer.write_bool_value("passCodeDisabled", self.pass_code_disabled)?;
        writer.write_i32_value(
            "passcodeLockGracePeriodInSeconds",
            self.passcode_lock_grace_period_in_seconds,
        )?;
        writer.write_bool_value(
            "preferredLanguageScreenDisabled",
            self.preferred_language_screen_disabled,
        )?;
        writer.write_bool_value(
            "restoreCompletedScreenDisabled",
            self.restore_completed_screen_disabled,
        )?;
        writer.write_bool_value(
            "restoreFromAndroidDisabled",
            self.restore_from_android_disabled,
        )?;
        writer.write_i32_value(
            "sharedIPadMaximumUserCount",
            self.shared_ipad_maximum_user_count,
        )?;
        writer.write_bool_value("simSetupScreenDisabled", self.sim_setup_screen_disabled)?;
        writer.write_bool_value(
            "softwareUpdateScreenDisabled",
            self.software_update_screen_disabled,
        )?;
        writer.write_i32_value(
            "temporarySessionTimeoutInSeconds",
            self.temporary_session_timeout_in_seconds,
        )?;
        writer.write_bool_value(
            "updateCompleteScreenDisabled",
            self.update_complete_screen_disabled,
        )?;
        writer.write_bool_value(
            "userlessSharedAadModeEnabled",
            self.userless_shared_aad_mode_enabled,
        )?;
        writer.write_i32_value(
            "userSessionTimeoutInSeconds",
            self.user_session_timeout_in_seconds,
        )?;
        writer.write_bool_value(
            "watchMigrationScreenDisabled",
            self.watch_migration_screen_disabled,
        )?;
        writer.write_bool_value("welcomeScreenDisabled", self.welcome_screen_disabled)?;
        writer.write_bool_value("zoomDisabled", self.zoom_disabled)
    }
}

impl Parsable for DepIosEnrollmentProfile {
    fn new_record() -> Self {
        Self::new()
    }

    fn deserialize_field<N: ParseNode>(
        &mut self,
        name: &str,
        node: &N,
    ) -> Result<bool, SerializationError> {
        match name {
            "appearanceScreenDisabled" => {
                self.appearance_screen_disabled = node.get_bool_value()?
            }
            "awaitDeviceConfiguredConfirmation" => {
                self.await_device_configured_confirmation = node.get_bool_value()?
            }
            "carrierActivationUrl" => self.carrier_activation_url = node.get_string_value()?,
            "companyPortalVppTokenId" => {
                self.company_portal_vpp_token_id = node.get_string_value()?
            }
            "deviceToDeviceMigrationDisabled" => {
                self.device_to_device_migration_disabled = node.get_bool_value()?
            }
            "enableSharedIPad" => self.enable_shared_ipad = node.get_bool_value()?,
            "enableSingleAppEnrollmentMode" => {
                self.enable_single_app_enrollment_mode = node.get_bool_value()?
            }
            "expressLanguageScreenDisabled" => {
                self.express_language_screen_disabled = node.get_bool_value()?
            }
            "forceTemporarySession" => self.force_temporary_session = node.get_bool_value()?,
            "homeButtonScreenDisabled" => {
                self.home_button_screen_disabled = node.get_bool_value()?
            }
            "iMessageAndFaceTimeScreenDisabled" => {
                self.imessage_and_face_time_screen_disabled = node.get_bool_value()?
            }
            "iTunesPairingMode" => self.itunes_pairing_mode = node.get_enum_value()?,
            "managementCertificates" => {
                self.management_certificates = node.get_collection_of_object_values()?
            }
            "onBoardingScreenDisabled" => {
                self.on_boarding_screen_disabled = node.get_bool_value()?
            }
            "passCodeDisabled" => self.pass_code_disabled = node.get_bool_value()?,
            "passcodeLockGracePeriodInSeconds" => {
                self.passcode_lock_grace_period_in_seconds = node.get_i32_value()?
            }
            "preferredLanguageScreenDisabled" => {
                self.preferred_language_screen_disabled = node.get_bool_value()?
            }
            "restoreCompletedScreenDisabled" => {
                self.restore_completed_screen_disabled = node.get_bool_value()?
            }
            "restoreFromAndroidDisabled" => {
                self.restore_from_android_disabled = node.get_bool_value()?
            }
            "sharedIPadMaximumUserCount" => {
                self.shared_ipad_maximum_user_count = node.get_i32_value()?
            }
            "simSetupScreenDisabled" => self.sim_setup_screen_disabled = node.get_bool_value()?,
            "softwareUpdateScreenDisabled" => {
                self.software_update_screen_disabled = node.get_bool_value()?
            }
            "temporarySessionTimeoutInSeconds" => {
                self.temporary_session_timeout_in_seconds = node.get_i32_value()?
            }
            "updateCompleteScreenDisabled" => {
                self.update_complete_screen_disabled = node.get_bool_value()?
            }
            "userlessSharedAadModeEnabled" => {
                self.userless_shared_aad_mode_enabled = node.get_bool_value()?
            }
            "userSessionTimeoutInSeconds" => {
                self.user_session_timeout_in_seconds = node.get_i32_value()?
            }
            "watchMigrationScreenDisabled" => {
                self.watch_migration_screen_disabled = node.get_bool_value()?
            }
            "welcomeScreenDisabled" => self.welcome_screen_disabled = node.get_bool_value()?,
            "zoomDisabled" => self.zoom_disabled = node.get_bool_value()?,
            _ => return self.dep_enrollment_base_profile.deserialize_field(name, node),
        }
        Ok(true)
    }

    fn additional_data(&self) -> &AdditionalData {
        self.dep_enrollment_base_profile.additional_data()
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        self.dep_enrollment_base_profile.additional_data_mut()
    }
}
