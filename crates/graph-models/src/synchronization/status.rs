//! Current job state of an identity synchronization job.

use chrono::{DateTime, Utc};
use odata_serialization::{
    AdditionalData, Parsable, ParseNode, Serializable, SerializationError, SerializationWriter,
};

use super::{
    StringKeyLongValuePair, SynchronizationStatusCode, SynchronizationTaskExecution,
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SynchronizationStatus {
    /// The overall job state.
    pub code: Option<SynchronizationStatusCode>,
    /// Number of consecutive times this job failed.
    pub count_successive_complete_failures: Option<i64>,
    /// True if the job's escrows were pruned during initial synchronization.
    pub escrows_pruned: Option<bool>,
    /// Details of the last execution of the job.
    pub last_execution: Option<SynchronizationTaskExecution>,
    /// Details of the last execution of this job which didn't have any errors.
    pub last_successful_execution: Option<SynchronizationTaskExecution>,
    /// Details of the last execution which exported objects into the target directory.
    pub last_successful_execution_with_exports: Option<SynchronizationTaskExecution>,
    /// The time when steady state was first achieved, UTC.
    pub steady_state_first_achieved_time: Option<DateTime<Utc>>,
    /// The time when steady state was last achieved, UTC.
    pub steady_state_last_achieved_time: Option<DateTime<Utc>>,
    /// Count of synchronized objects, listed by object type.
    pub synchronized_entry_count_by_type: Option<Vec<StringKeyLongValuePair>>,
    /// On error, the URL with the troubleshooting steps for the issue.
    pub troubleshooting_url: Option<String>,
    pub odata_type: Option<String>,
    pub additional_data: AdditionalData,
}

impl SynchronizationStatus {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Serializable for SynchronizationStatus {
    fn serialize<W: SerializationWriter>(&self, writer: &mut W) -> Result<(), SerializationError> {
        writer.write_enum_value("code", self.code.as_ref())?;
        writer.write_i64_value(
            "countSuccessiveCompleteFailures",
            self.count_successive_complete_failures,
        )?;
        writer.write_bool_value("escrowsPruned", self.escrows_pruned)?;
        writer.write_object_value("lastExecution", self.last_execution.as_ref())?;
        writer.write_object_value(
            "lastSuccessfulExecution",
            self.last_successful_execution.as_ref(),
        )?;
        writer.write_object_value(
            "lastSuccessfulExecutionWithExports",
            self.last_successful_execution_with_exports.as_ref(),
        )?;
        writer.write_datetime_value(
            "steadyStateFirstAchievedTime",
            self.steady_state_first_achieved_time.as_ref(),
        )?;
        writer.write_datetime_value(
            "steadyStateLastAchievedTime",
            self.steady_state_last_achieved_time.as_ref(),
        )?;
        writer.write_collection_of_object_values(
            "synchronizedEntryCountByType",
            self.synchronized_entry_count_by_type.as_deref(),
        )?;
        writer.write_string_value("troubleshootingUrl", self.troubleshooting_url.as_deref())?;
        writer.write_string_value("@odata.type", self.odata_type.as_deref())?;
        writer.write_additional_data(&self.additional_data)
    }
}

impl Parsable for SynchronizationStatus {
    fn new_record() -> Self {
        Self::new()
    }

    fn deserialize_field<N: ParseNode>(
        &mut self,
        name: &str,
        node: &N,
    ) -> Result<bool, SerializationError> {
        match name {
            "code" => self.code = node.get_enum_value()?,
            "countSuccessiveCompleteFailures" => {
                self.count_successive_complete_failures = node.get_i64_value()?
            }
            "escrowsPruned" => self.escrows_pruned = node.get_bool_value()?,
            "lastExecution" => self.last_execution = node.get_object_value()?,
            "lastSuccessfulExecution" => {
                self.last_successful_execution = node.get_object_value()?
            }
            "lastSuccessfulExecutionWithExports" => {
                self.last_successful_execution_with_exports = node.get_object_value()?
            }
            "steadyStateFirstAchievedTime" => {
                self.steady_state_first_achieved_time = node.get_datetime_value()?
            }
            "steadyStateLastAchievedTime" => {
                self.steady_state_last_achieved_time = node.get_datetime_value()?
            }
            "synchronizedEntryCountByType" => {
                self.synchronized_entry_count_by_type = node.get_collection_of_object_values()?
            }
            "troubleshootingUrl" => self.troubleshooting_url = node.get_string_value()?,
            "@odata.type" => self.odata_type = node.get_string_value()?,
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}
