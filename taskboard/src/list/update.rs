//! UpdateList command

use crate::error::{BoardError, Result};
use crate::outcome::{finish, Outcome};
use crate::types::{Board, ListId};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use taskboard_operations::{operation, Execute, ExecutionResult};

/// Rename a list
#[operation(verb = "update", noun = "list", description = "Rename a list")]
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpdateList {
    /// The list ID to rename
    pub id: ListId,
    /// New title
    pub title: String,
}

impl UpdateList {
    /// Create a new UpdateList command
    pub fn new(id: impl Into<ListId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }

    fn apply(&self, board: &mut Board) -> Result<Outcome> {
        let list = board
            .find_list_mut(&self.id)
            .ok_or_else(|| BoardError::ListNotFound {
                id: self.id.to_string(),
            })?;

        if list.title == self.title {
            return Ok(Outcome::Unchanged(serde_json::to_value(&*list)?));
        }

        list.title = self.title.clone();
        Ok(Outcome::Changed(serde_json::to_value(&*list)?))
    }
}

impl Execute<Board, BoardError> for UpdateList {
    fn execute(&self, board: &mut Board) -> ExecutionResult<Value, BoardError> {
        let start = std::time::Instant::now();
        let result = self.apply(board);
        finish(self, start, result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::board_with;

    #[test]
    fn test_update_list_title() {
        let mut board = board_with(&[("todo", &["a"]), ("done", &[])]);

        let result = UpdateList::new("todo", "Backlog")
            .execute(&mut board)
            .into_result()
            .unwrap();

        assert_eq!(result["title"], "Backlog");
        assert_eq!(board.lists[0].title, "Backlog");
        assert_eq!(board.lists[0].order, 0);
        assert_eq!(board.lists[0].tasks.len(), 1);
    }

    #[test]
    fn test_update_list_same_title_is_unchanged() {
        let mut board = board_with(&[("todo", &[])]);
        let result = UpdateList::new("todo", "TODO").execute(&mut board);
        assert!(!result.is_mutation());
        assert!(result.into_result().is_ok());
    }

    #[test]
    fn test_update_list_not_found() {
        let mut board = board_with(&[("todo", &[])]);
        let before = board.clone();

        let result = UpdateList::new("nope", "X").execute(&mut board);

        assert!(!result.should_log());
        assert!(matches!(
            result.into_result(),
            Err(BoardError::ListNotFound { .. })
        ));
        assert_eq!(board, before);
    }
}
