//! MoveList command

use crate::error::{BoardError, Result};
use crate::order::{move_item, renormalize};
use crate::outcome::{finish, Outcome};
use crate::types::{Board, ListId};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use taskboard_operations::{operation, Execute, ExecutionResult};

/// Move one list to an absolute position
#[operation(
    verb = "move",
    noun = "list",
    description = "Move a list to a new position on the board"
)]
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MoveList {
    /// The list ID to move
    pub id: ListId,
    /// Target position, clamped to the board
    pub index: usize,
}

impl MoveList {
    /// Create a new MoveList command
    pub fn new(id: impl Into<ListId>, index: usize) -> Self {
        Self {
            id: id.into(),
            index,
        }
    }

    fn apply(&self, board: &mut Board) -> Result<Outcome> {
        let from = board
            .list_index(&self.id)
            .ok_or_else(|| BoardError::ListNotFound {
                id: self.id.to_string(),
            })?;

        let to = self.index.min(board.lists.len() - 1);
        if from == to {
            return Ok(Outcome::Unchanged(
                serde_json::json!({ "id": self.id, "order": from }),
            ));
        }

        let landed = move_item(&mut board.lists, from, to);
        renormalize(&mut board.lists);

        Ok(Outcome::Changed(
            serde_json::json!({ "id": self.id, "order": landed }),
        ))
    }
}

impl Execute<Board, BoardError> for MoveList {
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

    fn ids(board: &Board) -> Vec<&str> {
        board.lists.iter().map(|l| l.id.as_str()).collect()
    }

    #[test]
    fn test_move_list_forward() {
        let mut board = board_with(&[("a", &[]), ("b", &[]), ("c", &[])]);
        MoveList::new("a", 2).execute(&mut board);
        assert_eq!(ids(&board), vec!["b", "c", "a"]);
        verify(&board).unwrap();
    }

    #[test]
    fn test_move_list_backward() {
        let mut board = board_with(&[("a", &[]), ("b", &[]), ("c", &[])]);
        MoveList::new("c", 0).execute(&mut board);
        assert_eq!(ids(&board), vec!["c", "a", "b"]);
        verify(&board).unwrap();
    }

    #[test]
    fn test_move_list_onto_itself_is_unchanged() {
        let mut board = board_with(&[("a", &[]), ("b", &[])]);
        let before = board.clone();
        let result = MoveList::new("b", 1).execute(&mut board);
        assert!(!result.is_mutation());
        assert_eq!(board, before);
    }

    #[test]
    fn test_move_list_clamps_index() {
        let mut board = board_with(&[("a", &[]), ("b", &[])]);
        MoveList::new("a", 99).execute(&mut board);
        assert_eq!(ids(&board), vec!["b", "a"]);

        // Last list clamped onto its own slot
        let result = MoveList::new("a", 50).execute(&mut board);
        assert!(!result.is_mutation());
    }

    #[test]
    fn test_move_list_not_found() {
        let mut board = board_with(&[("a", &[])]);
        let result = MoveList::new("x", 0).execute(&mut board).into_result();
        assert!(matches!(result, Err(BoardError::ListNotFound { .. })));
    }
}
