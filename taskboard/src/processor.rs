//! Board operation processor
//!
//! Wraps command execution with the board's failure policy: unknown ids are
//! silent no-ops, everything else is reported to the caller.

use crate::error::{BoardError, Result};
use crate::types::Board;
use serde_json::Value;
use taskboard_operations::{Execute, LogEntry, Operation, OperationProcessor};
use tracing::{debug, warn};

/// What a processed command produced
#[derive(Debug)]
pub struct Processed {
    /// The command's result value (`Null` for degraded no-ops)
    pub value: Value,
    /// True when the working board was changed
    pub changed: bool,
    /// Entry for the activity log, if the command should be recorded
    pub log_entry: Option<LogEntry>,
}

/// A failed command together with its log entry
#[derive(Debug)]
pub struct Rejected {
    pub error: BoardError,
    pub log_entry: Option<LogEntry>,
}

/// Processes board commands on behalf of an optional actor
#[derive(Debug, Clone, Default)]
pub struct BoardOperationProcessor {
    actor: Option<String>,
}

impl BoardOperationProcessor {
    /// Create a processor with no actor
    pub fn new() -> Self {
        Self::default()
    }

    /// Attribute log entries to an actor, e.g. `"ui[session]"`
    pub fn with_actor(actor: impl Into<String>) -> Self {
        Self {
            actor: Some(actor.into()),
        }
    }

    /// Execute a command against a working board.
    ///
    /// `ListNotFound` and `TaskNotFound` degrade to an unchanged result.
    pub fn process<O>(
        &self,
        operation: &O,
        board: &mut Board,
    ) -> std::result::Result<Processed, Rejected>
    where
        O: Execute<Board, BoardError> + ?Sized,
    {
        let (result, log_entry) = self.run(operation, board);
        match result {
            Ok(value) => {
                let changed = log_entry.is_some();
                if changed {
                    debug!(op = %operation.op_string(), actor = ?self.actor, "applied operation");
                }
                Ok(Processed {
                    value,
                    changed,
                    log_entry,
                })
            }
            Err(error) if error.is_not_found() => {
                debug!(op = %operation.op_string(), %error, "ignoring operation on unknown id");
                Ok(Processed {
                    value: Value::Null,
                    changed: false,
                    log_entry: None,
                })
            }
            Err(error) => {
                warn!(op = %operation.op_string(), %error, "operation rejected");
                Err(Rejected { error, log_entry })
            }
        }
    }

    /// Execute a command and discard any log entry
    pub fn execute<O>(&self, operation: &O, board: &mut Board) -> Result<Processed>
    where
        O: Execute<Board, BoardError> + ?Sized,
    {
        self.process(operation, board).map_err(|rejected| rejected.error)
    }
}

impl OperationProcessor<Board, BoardError> for BoardOperationProcessor {
    fn actor(&self) -> Option<&str> {
        self.actor.as_deref()
    }
}
