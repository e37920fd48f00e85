//! AddTask command

use crate::error::{BoardError, Result};
use crate::outcome::{finish, Outcome};
use crate::types::{Board, ListId, Task};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use taskboard_operations::{operation, Execute, ExecutionResult};

/// Append a new task to a list
#[operation(
    verb = "add",
    noun = "task",
    description = "Append a new task to the end of a list"
)]
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AddTask {
    /// The owning list
    pub list_id: ListId,
    /// The task title
    pub title: String,
    /// Optional description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl AddTask {
    /// Create a new AddTask command
    pub fn new(list_id: impl Into<ListId>, title: impl Into<String>) -> Self {
        Self {
            list_id: list_id.into(),
            title: title.into(),
            description: None,
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    fn apply(&self, board: &mut Board) -> Result<Outcome> {
        let list = board
            .find_list_mut(&self.list_id)
            .ok_or_else(|| BoardError::ListNotFound {
                id: self.list_id.to_string(),
            })?;

        let mut task = Task::new(
            list.id.clone(),
            self.title.clone(),
            list.tasks.len(),
            Utc::now(),
        );
        task.description = self.description.clone();

        let value = serde_json::to_value(&task)?;
        list.tasks.push(task);
        Ok(Outcome::Changed(value))
    }
}

impl Execute<Board, BoardError> for AddTask {
    fn execute(&self, board: &mut Board) -> ExecutionResult<Value, BoardError> {
        let start = std::time::Instant::now();
        let result = self.apply(board);
        finish(self, start, result)
    }
}
