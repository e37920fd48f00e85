//! UpdateTask command

use crate::error::{BoardError, Result};
use crate::outcome::{finish, Outcome};
use crate::types::{Board, TaskId, TaskPatch};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use taskboard_operations::{operation, Execute, ExecutionResult};

/// Update the mutable fields of a task
#[operation(verb = "update", noun = "task", description = "Update task title or description")]
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpdateTask {
    /// The task ID to update
    pub id: TaskId,
    /// New title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New description (None = don't change, Some(None) = clear, Some(Some(x)) = set)
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::types::deserialize_some"
    )]
    pub description: Option<Option<String>>,
}

impl UpdateTask {
    /// Create a new UpdateTask command
    pub fn new(id: impl Into<TaskId>) -> Self {
        Self {
            id: id.into(),
            title: None,
            description: None,
        }
    }

    /// Build from a typed patch
    pub fn from_patch(id: impl Into<TaskId>, patch: TaskPatch) -> Self {
        Self {
            id: id.into(),
            title: patch.title,
            description: patch.description,
        }
    }

    /// Set the title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(Some(description.into()));
        self
    }

    /// Clear the description
    pub fn clear_description(mut self) -> Self {
        self.description = Some(None);
        self
    }

    /// The fields this command changes
    pub fn patch(&self) -> TaskPatch {
        TaskPatch {
            title: self.title.clone(),
            description: self.description.clone(),
        }
    }

    fn apply(&self, board: &mut Board) -> Result<Outcome> {
        let task = board
            .find_task_mut(&self.id)
            .ok_or_else(|| BoardError::TaskNotFound {
                id: self.id.to_string(),
            })?;

        if self.patch().apply(task, Utc::now()) {
            Ok(Outcome::Changed(serde_json::to_value(&*task)?))
        } else {
            Ok(Outcome::Unchanged(serde_json::to_value(&*task)?))
        }
    }
}

impl Execute<Board, BoardError> for UpdateTask {
    fn execute(&self, board: &mut Board) -> ExecutionResult<Value, BoardError> {
        let start = std::time::Instant::now();
        let result = self.apply(board);
        finish(self, start, result)
    }
}
