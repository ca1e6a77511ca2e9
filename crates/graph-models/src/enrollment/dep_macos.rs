//! DEP enrollment profile for macOS devices.

use odata_serialization::{
    AdditionalData, Parsable, ParseNode, Serializable, SerializationError, SerializationWriter,
};

use super::DepEnrollmentBaseProfile;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DepMacOsEnrollmentProfile {
    pub dep_enrollment_base_profile: DepEnrollmentBaseProfile,
    /// Indicates if Accessibility screen is disabled.
    pub accessibility_screen_disabled: Option<bool>,
    /// Indicates if UnlockWithWatch screen is disabled.
    pub auto_unlock_with_watch_disabled: Option<bool>,
    /// Indicates if the Choose Your Lock Screen screen is disabled.
    pub choose_your_lock_screen_disabled: Option<bool>,
    /// Indicates whether Setup Assistant will auto populate the primary account information.
    pub dont_auto_populate_primary_account_info: Option<bool>,
    /// Indicates whether the user will enable block editing.
    pub enable_restrict_editing: Option<bool>,
    /// Indicates if file vault is disabled.
    pub file_vault_disabled: Option<bool>,
    /// Indicates if iCloud Analytics screen is disabled.
    pub icloud_diagnostics_disabled: Option<bool>,
    /// Indicates if iCloud Documents and Desktop screen is disabled.
    pub icloud_storage_disabled: Option<bool>,
    /// Indicates whether the profile is a local account.
    pub is_local_primary_account: Option<bool>,
    /// Indicates whether the profile is a primary user.
    pub is_primary_user: Option<bool>,
    /// Indicates whether the primary account information will be locked.
    pub lock_primary_account_info: Option<bool>,
    /// Indicates whether this is the short name of the local account to manage.
    pub managed_local_user_short_name: Option<bool>,
    /// Indicates if Passcode setup pane is disabled.
    pub pass_code_disabled: Option<bool>,
    /// Indicates whether the user will prefill their account info.
    pub prefill_account_info: Option<bool>,
    /// The full name for the primary account.
    pub primary_account_full_name: Option<String>,
    /// The account name for the primary account.
    pub primary_account_user_name: Option<String>,
    /// The primary user of the profile.
    pub primary_user: Option<String>,
    /// The full name of the primary user of the profile.
    pub primary_user_full_name: Option<String>,
    /// Indicates if registration is disabled.
    pub registration_disabled: Option<bool>,
    /// Indicates if the device is network-tethered to run the command.
    pub request_requires_network_tether: Option<bool>,
    /// Indicates whether Setup Assistant will set the account as a regular user.
    pub set_primary_setup_account_as_regular_user: Option<bool>,
    /// Indicates whether Setup Assistant will skip the primary account setup UI.
    pub skip_primary_setup_account_creation: Option<bool>,
    /// Indicates if zoom setup pane is disabled.
    pub zoom_disabled: Option<bool>,
}

impl DepMacOsEnrollmentProfile {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.depMacOSEnrollmentProfile";

    pub fn new() -> Self {
        let mut base = DepEnrollmentBaseProfile::new();
        base.enrollment_profile.entity.odata_type = Some(Self::ODATA_TYPE.to_owned());
        Self {
            dep_enrollment_base_profile: base,
            ..Self::default()
        }
    }
}

impl Serializable for DepMacOsEnrollmentProfile {
    fn serialize<W: SerializationWriter>(&self, writer: &mut W) -> Result<(), SerializationError> {
        self.dep_enrollment_base_profile.serialize(writer)?;
        writer.write_bool_value(
            "accessibilityScreenDisabled",
            self.accessibility_screen_disabled,
        )?;
        writer.write_bool_value(
            "autoUnlockWithWatchDisabled",
            self.auto_unlock_with_watch_disabled,
        )?;
        writer.write_bool_value(
            "chooseYourLockScreenDisabled",
            self.choose_your_lock_screen_disabled,
        )?;
        writer.write_bool_value(
            "dontAutoPopulatePrimaryAccountInfo",
            self.dont_auto_populate_primary_account_info,
        )?;
        writer.write_bool_value("enableRestrictEditing", self.enable_restrict_editing)?;
        writer.write_bool_value("fileVaultDisabled", self.file_vault_disabled)?;
        writer.write_bool_value("iCloudDiagnosticsDisabled", self.icloud_diagnostics_disabled)?;
        writer.write_bool_value("iCloudStorageDisabled", self.icloud_storage_disabled)?;
        writer.write_bool_value("isLocalPrimaryAccount", self.is_local_primary_account)?;
        writer.write_bool_value("isPrimaryUser", self.is_primary_user)?;
        writer.write_bool_value("lockPrimaryAccountInfo", self.lock_primary_account_info)?;
        writer.write_bool_value(
            "managedLocalUserShortName",
            self.managed_local_user_short_name,
        )?;
        writer.write_bool_value("passCodeDisabled", self.pass_code_disabled)?;
        writer.write_bool_value("prefillAccountInfo", self.prefill_account_info)?;
        writer.write_string_value(
            "primaryAccountFullName",
            self.primary_account_full_name.as_deref(),
        )?;
        writer.write_string_value(
            "primaryAccountUserName",
            self.primary_account_user_name.as_deref(),
        )?;
        writer.write_string_value("primaryUser", self.primary_user.as_deref())?;
        writer.write_string_value("primaryUserFullName", self.primary_user_full_name.as_deref())?;
        writer.write_bool_value("registrationDisabled", self.registration_disabled)?;
        writer.write_bool_value(
            "requestRequiresNetworkTether",
            self.request_requires_network_tether,
        )?;
        writer.write_bool_value(
            "setPrimarySetupAccountAsRegularUser",
            self.set_primary_setup_account_as_regular_user,
        )?;
        writer.write_bool_value(
            "skipPrimarySetupAccountCreation",
            self.skip_primary_setup_account_creation,
        )?;
        writer.write_bool_value("zoomDisabled", self.zoom_disabled)
    }
}

impl Parsable for DepMacOsEnrollmentProfile {
    fn new_record() -> Self {
        Self::new()
    }

    fn deserialize_field<N: ParseNode>(
        &mut self,
        name: &str,
        node: &N,
    ) -> Result<bool, SerializationError> {
        match name {
            "accessibilityScreenDisabled" => {
                self.accessibility_screen_disabled = node.get_bool_value()?
            }
            "autoUnlockWithWatchDisabled" => {
                self.auto_unlock_with_watch_disabled = node.get_bool_value()?
            }
            "chooseYourLockScreenDisabled" => {
                self.choose_your_lock_screen_disabled = node.get_bool_value()?
            }
            "dontAutoPopulatePrimaryAccountInfo" => {
                self.dont_auto_populate_primary_account_info = node.get_bool_value()?
            }
            "enableRestrictEditing" => self.enable_restrict_editing = node.get_bool_value()?,
            "fileVaultDisabled" => self.file_vault_disabled = node.get_bool_value()?,
            "iCloudDiagnosticsDisabled" => {
                self.icloud_diagnostics_disabled = node.get_bool_value()?
            }
            "iCloudStorageDisabled" => self.icloud_storage_disabled = node.get_bool_value()?,
            "isLocalPrimaryAccount" => self.is_local_primary_account = node.get_bool_value()?,
            "isPrimaryUser" => self.is_primary_user = node.get_bool_value()?,
            "lockPrimaryAccountInfo" => self.lock_primary_account_info = node.get_bool_value()?,
            "managedLocalUserShortName" => {
                self.managed_local_user_short_name = node.get_bool_value()?
            }
            "passCodeDisabled" => self.pass_code_disabled = node.get_bool_value()?,
            "prefillAccountInfo" => self.prefill_account_info = node.get_bool_value()?,
            "primaryAccountFullName" => {
                self.primary_account_full_name = node.get_string_value()?
            }
            "primaryAccountUserName" => {
                self.primary_account_user_name = node.get_string_value()?
            }
            "primaryUser" => self.primary_user = node.get_string_value()?,
            "primaryUserFullName" => self.primary_user_full_name = node.get_string_value()?,
            "registrationDisabled" => self.registration_disabled = node.get_bool_value()?,
            "requestRequiresNetworkTether" => {
                self.request_requires_network_tether = node.get_bool_value()?
            }
            "setPrimarySetupAccountAsRegularUser" => {
                self.set_primary_setup_account_as_regular_user = node.get_bool_value()?
            }
            "skipPrimarySetupAccountCreation" => {
                self.skip_primary_setup_account_creation = node.get_bool_value()?
            }
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
