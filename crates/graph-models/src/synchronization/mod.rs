//! Identity synchronization job status records.

mod status;
mod status_code;
mod string_key_long_value_pair;
mod sync_error;
mod task_execution;
mod task_execution_result;

pub use status::SynchronizationStatus;
pub use status_code::SynchronizationStatusCode;
pub use string_key_long_value_pair::StringKeyLongValuePair;
pub use sync_error::SynchronizationError;
pub use task_execution::SynchronizationTaskExecution;
pub use task_execution_result::SynchronizationTaskExecutionResult;
