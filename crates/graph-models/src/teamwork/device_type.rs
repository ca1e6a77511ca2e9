//! Kind of Teams-enabled hardware.

use std::fmt;
use std::str::FromStr;

use odata_serialization::EnumParseError;

/// Evolvable enumeration, see
/// [`TeamworkDeviceActivityState`](super::TeamworkDeviceActivityState).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TeamworkDeviceType {
    Unknown,
    IpPhone,
    TeamsRoom,
    SurfaceHub,
    CollaborationBar,
    TeamsDisplay,
    TouchConsole,
    LowCostPhone,
    TeamsPanel,
    Sip,
    Unrecognized(String),
}

impl TeamworkDeviceType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Unknown => "unknown",
            Self::IpPhone => "ipPhone",
            Self::TeamsRoom => "teamsRoom",
            Self::SurfaceHub => "surfaceHub",
            Self::CollaborationBar => "collaborationBar",
            Self::TeamsDisplay => "teamsDisplay",
            Self::TouchConsole => "touchConsole",
            Self::LowCostPhone => "lowCostPhone",
            Self::TeamsPanel => "teamsPanel",
            Self::Sip => "sip",
            Self::Unrecognized(s) => s,
        }
    }
}

impl fmt::Display for TeamworkDeviceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TeamworkDeviceType {
    type Err = EnumParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "unknown" => Self::Unknown,
            "ipPhone" => Self::IpPhone,
            "teamsRoom" => Self::TeamsRoom,
            "surfaceHub" => Self::SurfaceHub,
            "collaborationBar" => Self::CollaborationBar,
            "teamsDisplay" => Self::TeamsDisplay,
            "touchConsole" => Self::TouchConsole,
            "lowCostPhone" => Self::LowCostPhone,
            "teamsPanel" => Self::TeamsPanel,
            "sip" => Self::Sip,
            _ => Self::Unrecognized(s.to_owned()),
        })
    }
}
