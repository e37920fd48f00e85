//! Shared tail of every mutating command: timing, log entry, failure policy

use crate::error::{BoardError, Result};
use serde::Serialize;
use serde_json::Value;
use std::time::Instant;
use taskboard_operations::{ExecutionResult, LogEntry, Operation};

/// What a command did to the working copy
pub(crate) enum Outcome {
    /// The board changed; the value describes the affected entity
    Changed(Value),
    /// Nothing to change (same-slot move, identical title, ...)
    Unchanged(Value),
}

/// Convert a command's result into an `ExecutionResult`.
///
/// Unknown ids fail without a log entry since the store degrades them to
/// no-ops; every other failure is recorded.
pub(crate) fn finish<O>(
    op: &O,
    start: Instant,
    result: Result<Outcome>,
) -> ExecutionResult<Value, BoardError>
where
    O: Operation + Serialize,
{
    let duration_ms = start.elapsed().as_millis() as u64;
    let input = serde_json::to_value(op).unwrap_or(Value::Null);

    match result {
        Ok(Outcome::Changed(value)) => ExecutionResult::Logged {
            value: value.clone(),
            log_entry: LogEntry::new(op.op_string(), input, value, None, duration_ms),
        },
        Ok(Outcome::Unchanged(value)) => ExecutionResult::Unlogged { value },
        Err(error) if error.is_not_found() => ExecutionResult::Failed {
            error,
            log_entry: None,
        },
        Err(error) => {
            let log_entry = LogEntry::failure(op.op_string(), input, &error, duration_ms);
            ExecutionResult::Failed {
                error,
                log_entry: Some(log_entry),
            }
        }
    }
}
