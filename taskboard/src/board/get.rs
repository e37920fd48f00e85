//! GetBoard command

use crate::error::BoardError;
use crate::types::Board;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use taskboard_operations::{operation, Execute, ExecutionResult};

/// Get the board with all lists and tasks (read-only)
#[operation(
    verb = "get",
    noun = "board",
    description = "Get the board with its lists and tasks"
)]
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GetBoard;

impl GetBoard {
    pub fn new() -> Self {
        Self
    }
}

impl Execute<Board, BoardError> for GetBoard {
    fn execute(&self, board: &mut Board) -> ExecutionResult<Value, BoardError> {
        match serde_json::to_value(&*board) {
            Ok(mut value) => {
                value["task_count"] = serde_json::json!(board.task_count());
                ExecutionResult::Unlogged { value }
            }
            Err(e) => ExecutionResult::Failed {
                error: e.into(),
                log_entry: None,
            },
        }
    }
}
