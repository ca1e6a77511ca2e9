//! Overall state of an identity synchronization job.

use std::fmt;
use std::str::FromStr;

use odata_serialization::EnumParseError;

/// Closed enumeration; unrecognized wire strings are an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SynchronizationStatusCode {
    NotConfigured,
    NotRun,
    Active,
    Paused,
    Quarantine,
}

impl SynchronizationStatusCode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NotConfigured => "NotConfigured",
            Self::NotRun => "NotRun",
            Self::Active => "Active",
            Self::Paused => "Paused",
            Self::Quarantine => "Quarantine",
        }
    }
}

impl fmt::Display for SynchronizationStatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SynchronizationStatusCode {
    type Err = EnumParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NotConfigured" => Ok(Self::NotConfigured),
            "NotRun" => Ok(Self::NotRun),
            "Active" => Ok(Self::Active),
            "Paused" => Ok(Self::Paused),
            "Quarantine" => Ok(Self::Quarantine),
            _ => Err(EnumParseError::new("SynchronizationStatusCode", s)),
        }
    }
}
