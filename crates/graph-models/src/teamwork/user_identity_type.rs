use std::fmt;
use std::str::FromStr;

use odata_serialization::EnumParseError;

/// Evolvable enumeration, see
/// [`TeamworkDeviceActivityState`](super::TeamworkDeviceActivityState).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TeamworkUserIdentityType {
    AadUser,
    OnPremiseAadUser,
    AnonymousGuest,
    FederatedUser,
    PersonalMicrosoftAccountUser,
    SkypeUser,
    PhoneUser,
    EmailUser,
    Unrecognized(String),
}

impl TeamworkUserIdentityType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::AadUser => "aadUser",
            Self::OnPremiseAadUser => "onPremiseAadUser",
            Self::AnonymousGuest => "anonymousGuest",
            Self::FederatedUser => "federatedUser",
            Self::PersonalMicrosoftAccountUser => "personalMicrosoftAccountUser",
            Self::SkypeUser => "skypeUser",
            Self::PhoneUser => "phoneUser",
            Self::EmailUser => "emailUser",
            Self::Unrecognized(s) => s,
        }
    }
}

impl fmt::Display for TeamworkUserIdentityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TeamworkUserIdentityType {
    type Err = EnumParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "aadUser" => Self::AadUser,
            "onPremiseAadUser" => Self::OnPremiseAadUser,
            "anonymousGuest" => Self::AnonymousGuest,
            "federatedUser" => Self::FederatedUser,
            "personalMicrosoftAccountUser" => Self::PersonalMicrosoftAccountUser,
            "skypeUser" => Self::SkypeUser,
            "phoneUser" => Self::PhoneUser,
            "emailUser" => Self::EmailUser,
            _ => Self::Unrecognized(s.to_owned()),
        })
    }
}
