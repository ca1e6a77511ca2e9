//! Device enrollment profiles and the Apple DEP profile family.

mod dep_base;
mod dep_ios;
mod dep_macos;
mod itunes_pairing_mode;
mod management_certificate;
mod profile;
mod variant;

pub use dep_base::DepEnrollmentBaseProfile;
pub use dep_ios::DepIosEnrollmentProfile;
pub use dep_macos::DepMacOsEnrollmentProfile;
pub use itunes_pairing_mode::ITunesPairingMode;
pub use management_certificate::ManagementCertificateWithThumbprint;
pub use profile::EnrollmentProfile;
pub use variant::DepEnrollmentProfile;
