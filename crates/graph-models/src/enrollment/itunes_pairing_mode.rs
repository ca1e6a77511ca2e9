//! Pairing modes for iTunes synchronization during DEP enrollment.

use std::fmt;
use std::str::FromStr;

use odata_serialization::EnumParseError;

/// Closed enumeration; unrecognized wire strings are an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ITunesPairingMode {
    Disallow,
    Allow,
    RequiresSetup,
}

impl ITunesPairingMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Disallow => "disallow",
            Self::Allow => "allow",
            Self::RequiresSetup => "requiresSetup",
        }
    }
}

impl fmt::Display for ITunesPairingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ITunesPairingMode {
    type Err = EnumParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "disallow" => Ok(Self::Disallow),
            "allow" => Ok(Self::Allow),
            "requiresSetup" => Ok(Self::RequiresSetup),
            _ => Err(EnumParseError::new("ITunesPairingMode", s)),
        }
    }
}
