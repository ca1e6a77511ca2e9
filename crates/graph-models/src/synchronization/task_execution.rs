//! Details of one synchronization job run.

use chrono::{DateTime, Utc};
use odata_serialization::{
    AdditionalData, Parsable, ParseNode, Serializable, SerializationError, SerializationWriter,
};

use super::{SynchronizationError, SynchronizationTaskExecutionResult};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SynchronizationTaskExecution {
    /// Identifier of the job run.
    pub activity_identifier: Option<String>,
    /// Count of processed entries that were assigned for this application.
    pub count_entitled: Option<i64>,
    /// Count of processed entries that were assigned for provisioning.
    pub count_entitled_for_provisioning: Option<i64>,
    /// Count of entries that were escrowed (errors).
    pub count_escrowed: Option<i64>,
    /// Count of entries that were escrowed, including system-generated escrows.
    pub count_escrowed_raw: Option<i64>,
    /// Count of exported entries.
    pub count_exported: Option<i64>,
    /// Count of entries that were expected to be exported.
    pub count_exports: Option<i64>,
    /// Count of imported entries.
    pub count_imported: Option<i64>,
    /// Count of imported delta-changes.
    pub count_imported_deltas: Option<i64>,
    /// Count of imported delta-changes pertaining to reference changes.
    pub count_imported_reference_deltas: Option<i64>,
    /// If an error was encountered, its details.
    pub error: Option<SynchronizationError>,
    /// The job run's outcome.
    pub state: Option<SynchronizationTaskExecutionResult>,
    /// Time when this job run began, UTC.
    pub time_began: Option<DateTime<Utc>>,
    /// Time when this job run ended, UTC.
    pub time_ended: Option<DateTime<Utc>>,
    pub odata_type: Option<String>,
    pub additional_data: AdditionalData,
}

impl SynchronizationTaskExecution {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Serializable for SynchronizationTaskExecution {
    fn serialize<W: SerializationWriter>(&self, writer: &mut W) -> Result<(), SerializationError> {
        writer.write_string_value("activityIdentifier", self.activity_identifier.as_deref())?;
        writer.write_i64_value("countEntitled", self.count_entitled)?;
        writer.write_i64_value(
            "countEntitledForProvisioning",
            self.count_entitled_for_provisioning,
        )?;
        writer.write_i64_value("countEscrowed", self.count_escrowed)?;
        writer.write_i64_value("countEscrowedRaw", self.count_escrowed_raw)?;
        writer.write_i64_value("countExported", self.count_exported)?;
        writer.write_i64_value("countExports", self.count_exports)?;
        writer.write_i64_value("countImported", self.count_imported)?;
        writer.write_i64_value("countImportedDeltas", self.count_imported_deltas)?;
        writer.write_i64_value(
            "countImportedReferenceDeltas",
            self.count_imported_reference_deltas,
        )?;
        writer.write_object_value("error", self.error.as_ref())?;
        writer.write_enum_value("state", self.state.as_ref())?;
        writer.write_datetime_value("timeBegan", self.time_began.as_ref())?;
        writer.write_datetime_value("timeEnded", self.time_ended.as_ref())?;
        writer.write_string_value("@odata.type", self.odata_type.as_deref())?;
        writer.write_additional_data(&self.additional_data)
    }
}

impl Parsable for SynchronizationTaskExecution {
    fn new_record() -> Self {
        Self::new()
    }

    fn deserialize_field<N: ParseNode>(
        &mut self,
        name: &str,
        node: &N,
    ) -> Result<bool, SerializationError> {
        match name {
            "activityIdentifier" => self.activity_identifier = node.get_string_value()?,
            "countEntitled" => self.count_entitled = node.get_i64_value()?,
            "countEntitledForProvisioning" => {
                self.count_entitled_for_provisioning = node.get_i64_value()?
            }
            "countEscrowed" => self.count_escrowed = node.get_i64_value()?,
            "countEscrowedRaw" => self.count_escrowed_raw = node.get_i64_value()?,
            "countExported" => self.count_exported = node.get_i64_value()?,
            "countExports" => self.count_exports = node.get_i64_value()?,
            "countImported" => self.count_imported = node.get_i64_value()?,
            "countImportedDeltas" => self.count_imported_deltas = node.get_i64_value()?,
            "countImportedReferenceDeltas" => {
                self.count_imported_reference_deltas = node.get_i64_value()?
            }
            "error" => self.error = node.get_object_value()?,
            "state" => self.state = node.get_enum_value()?,
            "timeBegan" => self.time_began = node.get_datetime_value()?,
            "timeEnded" => self.time_ended = node.get_datetime_value()?,
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
