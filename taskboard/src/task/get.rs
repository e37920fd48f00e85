//! GetTask command

use crate::error::BoardError;
use crate::types::{Board, TaskId};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use taskboard_operations::{operation, Execute, ExecutionResult};

/// Get a task by ID (read-only)
#[operation(verb = "get", noun = "task", description = "Get a task by ID")]
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GetTask {
    /// The task ID to fetch
    pub id: TaskId,
}

impl GetTask {
    pub fn new(id: impl Into<TaskId>) -> Self {
        Self { id: id.into() }
    }
}

impl Execute<Board, BoardError> for GetTask {
    fn execute(&self, board: &mut Board) -> ExecutionResult<Value, BoardError> {
        let Some(task) = board.find_task(&self.id) else {
            return ExecutionResult::Failed {
                error: BoardError::TaskNotFound {
                    id: self.id.to_string(),
                },
                log_entry: None,
            };
        };

        match serde_json::to_value(task) {
            Ok(value) => ExecutionResult::Unlogged { value },
            Err(e) => ExecutionResult::Failed {
                error: e.into(),
                log_entry: None,
            },
        }
    }
}
