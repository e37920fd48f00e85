//! DeleteList command

use crate::error::{BoardError, Result};
use crate::order::renormalize;
use crate::outcome::{finish, Outcome};
use crate::types::{Board, ListId};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use taskboard_operations::{operation, Execute, ExecutionResult};

/// Delete a list together with its tasks
#[operation(
    verb = "delete",
    noun = "list",
    description = "Delete a list and the tasks it holds"
)]
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DeleteList {
    /// The list ID to delete
    pub id: ListId,
}

impl DeleteList {
    pub fn new(id: impl Into<ListId>) -> Self {
        Self { id: id.into() }
    }

    fn apply(&self, board: &mut Board) -> Result<Outcome> {
        let index = board
            .list_index(&self.id)
            .ok_or_else(|| BoardError::ListNotFound {
                id: self.id.to_string(),
            })?;

        // Tasks go with their list; nothing is orphaned
        let removed = board.lists.remove(index);
        renormalize(&mut board.lists);

        Ok(Outcome::Changed(serde_json::json!({
            "deleted": true,
            "id": self.id.to_string(),
            "tasks_removed": removed.tasks.len(),
        })))
    }
}

impl Execute<Board, BoardError> for DeleteList {
    fn execute(&self, board: &mut Board) -> ExecutionResult<Value, BoardError> {
        let start = std::time::Instant::now();
        let result = self.apply(board);
        finish(self, start, result)
    }
}
