//! Activity state of a Teams-enabled device.

use std::fmt;
use std::str::FromStr;

use odata_serialization::EnumParseError;

/// Evolvable enumeration: a wire string this client release does not know is
/// kept in the `Unrecognized` arm and reproduced verbatim on encode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TeamworkDeviceActivityState {
    Unknown,
    Busy,
    Idle,
    Unavailable,
    Unrecognized(String),
}

impl TeamworkDeviceActivityState {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Unknown => "unknown",
            Self::Busy => "busy",
            Self::Idle => "idle",
            Self::Unavailable => "unavailable",
            Self::Unrecognized(s) => s,
        }
    }
}

impl fmt::Display for TeamworkDeviceActivityState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TeamworkDeviceActivityState {
    type Err = EnumParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "unknown" => Self::Unknown,
            "busy" => Self::Busy,
            "idle" => Self::Idle,
            "unavailable" => Self::Unavailable,
            _ => Self::Unrecognized(s.to_owned()),
        })
    }
}
