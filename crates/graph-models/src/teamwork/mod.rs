//! Teams-enabled device records.

mod activity_state;
mod device;
mod device_configuration;
mod device_type;
mod hardware_detail;
mod health_status;
mod system_configuration;
mod user_identity;
mod user_identity_type;

pub use activity_state::TeamworkDeviceActivityState;
pub use device::TeamworkDevice;
pub use device_configuration::TeamworkDeviceConfiguration;
pub use device_type::TeamworkDeviceType;
pub use hardware_detail::TeamworkHardwareDetail;
pub use health_status::TeamworkDeviceHealthStatus;
pub use system_configuration::TeamworkSystemConfiguration;
pub use user_identity::TeamworkUserIdentity;
pub use user_identity_type::TeamworkUserIdentityType;
