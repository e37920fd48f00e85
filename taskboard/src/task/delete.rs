//! DeleteTask command

use crate::error::{BoardError, Result};
use crate::order::renormalize;
use crate::outcome::{finish, Outcome};
use crate::types::{Board, TaskId};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use taskboard_operations::{operation, Execute, ExecutionResult};

/// Delete a task from whichever list holds it
#[operation(verb = "delete", noun = "task", description = "Delete a task")]
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DeleteTask {
    /// The task ID to delete
    pub id: TaskId,
}

impl DeleteTask {
    pub fn new(id: impl Into<TaskId>) -> Self {
        Self { id: id.into() }
    }

    fn apply(&self, board: &mut Board) -> Result<Outcome> {
        let (li, ti) = board
            .locate_task(&self.id)
            .ok_or_else(|| BoardError::TaskNotFound {
                id: self.id.to_string(),
            })?;

        let list = &mut board.lists[li];
        list.tasks.remove(ti);
        renormalize(&mut list.tasks);

        Ok(Outcome::Changed(serde_json::json!({
            "deleted": true,
            "id": self.id.to_string(),
            "listId": list.id,
        })))
    }
}

impl Execute<Board, BoardError> for DeleteTask {
    fn execute(&self, board: &mut Board) -> ExecutionResult<Value, BoardError> {
        let start = std::time::Instant::now();
        let result = self.apply(board);
        finish(self, start, result)
    }
}
