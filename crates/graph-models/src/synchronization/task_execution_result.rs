//! Outcome of one synchronization job run.

use std::fmt;
use std::str::FromStr;

use odata_serialization::EnumParseError;

/// Closed enumeration; unrecognized wire strings are an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SynchronizationTaskExecutionResult {
    Succeeded,
    Failed,
    EntryLevelErrors,
}

impl SynchronizationTaskExecutionResult {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Succeeded => "Succeeded",
            Self::Failed => "Failed",
            Self::EntryLevelErrors => "EntryLevelErrors",
        }
    }
}

impl fmt::Display for SynchronizationTaskExecutionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SynchronizationTaskExecutionResult {
    type Err = EnumParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Succeeded" => Ok(Self::Succeeded),
            "Failed" => Ok(Self::Failed),
            "EntryLevelErrors" => Ok(Self::EntryLevelErrors),
            _ => Err(EnumParseError::new("SynchronizationTaskExecutionResult", s)),
        }
    }
}
