//! Health status of a Teams-enabled device.

use std::fmt;
use std::str::FromStr;

use odata_serialization::EnumParseError;

/// Evolvable enumeration, see
/// [`TeamworkDeviceActivityState`](super::TeamworkDeviceActivityState).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TeamworkDeviceHealthStatus {
    Unknown,
    Offline,
    Critical,
    NonUrgent,
    Healthy,
    Unrecognized(String),
}

impl TeamworkDeviceHealthStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Unknown => "unknown",
            Self::Offline => "offline",
            Self::Critical => "critical",
            Self::NonUrgent => "nonUrgent",
            Self::Healthy => "healthy",
            Self::Unrecognized(s) => s,
        }
    }
}

impl fmt::Display for TeamworkDeviceHealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TeamworkDeviceHealthStatus {
    type Err = EnumParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "unknown" => Self::Unknown,
            "offline" => Self::Offline,
            "critical" => Self::Critical,
            "nonUrgent" => Self::NonUrgent,
            "healthy" => Self::Healthy,
            _ => Self::Unrecognized(s.to_owned()),
        })
    }
}
