//! AddList command

use crate::error::{BoardError, Result};
use crate::outcome::{finish, Outcome};
use crate::types::{Board, List};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use taskboard_operations::{operation, Execute, ExecutionResult};

/// Append a new list to the board
#[operation(
    verb = "add",
    noun = "list",
    description = "Append a new list to the board"
)]
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AddList {
    /// The list title (may be empty; callers validate input)
    pub title: String,
}

impl AddList {
    /// Create a new AddList command
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    fn apply(&self, board: &mut Board) -> Result<Outcome> {
        let list = List::new(self.title.clone(), board.lists.len());
        let value = serde_json::to_value(&list)?;
        board.lists.push(list);
        Ok(Outcome::Changed(value))
    }
}

impl Execute<Board, BoardError> for AddList {
    fn execute(&self, board: &mut Board) -> ExecutionResult<Value, BoardError> {
        let start = std::time::Instant::now();
        let result = self.apply(board);
        finish(self, start, result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::verify;
    use crate::test_support::board_with;

    #[test]
    fn test_add_list_appends() {
        let mut board = board_with(&[("todo", &[]), ("done", &[])]);

        let result = AddList::new("Blocked")
            .execute(&mut board)
            .into_result()
            .unwrap();

        assert_eq!(result["title"], "Blocked");
        assert_eq!(result["order"], 2);
        assert_eq!(board.lists.len(), 3);
        assert_eq!(board.lists[2].title, "Blocked");
        assert!(board.lists[2].tasks.is_empty());
        verify(&board).unwrap();
    }

    #[test]
    fn test_add_list_allows_empty_title() {
        let mut board = board_with(&[]);
        let result = AddList::new("").execute(&mut board);
        assert!(result.is_mutation());
        assert_eq!(board.lists[0].order, 0);
    }

    #[test]
    fn test_add_list_ids_are_unique() {
        let mut board = board_with(&[]);
        AddList::new("A").execute(&mut board);
        AddList::new("A").execute(&mut board);
        assert_ne!(board.lists[0].id, board.lists[1].id);
    }
}
